use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::response::{attachment_name, ensure_success, read_json};
use super::transport::{GlooTransport, HttpRequest, Method, Transport};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::Envelope;
use crate::session::{LocalStorageStore, Session};

/// Placeholder for calls that carry no body.
pub const NO_BODY: Option<&'static Value> = None;

/// Bytes of a downloaded file plus the name the server suggested.
#[derive(Clone, Debug, PartialEq)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

/// Authenticated access to the backend.
///
/// Every call reads the token from the [`Session`] at send time, so a
/// login or logout takes effect on the next request without rebuilding
/// the client.
pub struct ApiClient {
    base_url: String,
    session: Session,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
            transport,
        }
    }

    pub fn browser(config: &AppConfig) -> Self {
        let store = Rc::new(LocalStorageStore::new(config.token_key.clone()));
        Self::new(config, Session::new(store), Rc::new(GlooTransport))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn prepare(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        extra_headers: &[(&str, &str)],
    ) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in extra_headers {
            set_header(&mut headers, name, value);
        }
        if let Some(token) = self.session.token() {
            set_header(&mut headers, "Authorization", &format!("Bearer {}", token));
        }

        HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        }
    }

    /// One best-effort call: bearer token, JSON headers, uniform errors.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        self.request_with_headers(method, path, body, &[]).await
    }

    pub async fn request_with_headers<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        headers: &[(&str, &str)],
    ) -> ApiResult<Option<Value>>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_string).transpose()?;
        let request = self.prepare(method, path, body, headers);
        log::debug!("{} {}", method.as_str(), request.url);

        let resp = self.transport.send(request).await.map_err(|err| {
            log::warn!("{} {} failed: {}", method.as_str(), path, err);
            err
        })?;
        read_json(&resp).map_err(|err| {
            log::warn!("{} {} -> {}: {}", method.as_str(), path, resp.status, err);
            err
        })
    }

    /// `GET` unwrapping the `{ "data": ... }` envelope.
    pub async fn get_data<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
    {
        self.send_data(Method::Get, path, NO_BODY).await
    }

    pub async fn send_data<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let value = self.request(method, path, body).await?;
        unwrap_envelope(value)
    }

    /// Same as [`request`](Self::request) but the body is not needed.
    pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.request(method, path, body).await.map(|_| ())
    }

    /// Authenticated `GET` of a binary payload.
    pub async fn download(&self, path: &str) -> ApiResult<Download> {
        let request = self.prepare(Method::Get, path, None, &[]);
        log::debug!("GET {} (download)", request.url);

        let resp = self.transport.send(request).await?;
        ensure_success(&resp).map_err(|err| {
            log::warn!("download {} -> {}: {}", path, resp.status, err);
            err
        })?;

        let file_name = attachment_name(&resp);
        Ok(Download {
            bytes: resp.body,
            file_name,
        })
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        Some(existing) => existing.1 = value.to_string(),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// Absent body or absent `data` yields `T::default()`.
pub fn unwrap_envelope<T>(value: Option<Value>) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };
    let envelope: Envelope<T> = serde_json::from_value(value)?;
    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::api::transport::fake::FakeTransport;
    use crate::api::transport::HttpResponse;
    use crate::error::ApiError;
    use crate::session::MemoryTokenStore;

    fn client_with(fake: FakeTransport, token: Option<&str>) -> (ApiClient, Rc<FakeTransport>) {
        let fake = Rc::new(fake);
        let store = match token {
            Some(token) => MemoryTokenStore::with_token(token),
            None => MemoryTokenStore::default(),
        };
        let config = AppConfig {
            api_base_url: "http://api.test/api/v1/".to_string(),
            ..AppConfig::default()
        };
        let client = ApiClient::new(&config, Session::new(Rc::new(store)), fake.clone());
        (client, fake)
    }

    #[test]
    fn url_joins_with_single_slash() {
        let (client, _) = client_with(FakeTransport::default(), None);
        assert_eq!(client.url("/items"), "http://api.test/api/v1/items");
        assert_eq!(client.url("kategori/3"), "http://api.test/api/v1/kategori/3");
    }

    #[test]
    fn bearer_token_and_json_header_are_attached() {
        let (client, fake) = client_with(FakeTransport::default().reply(200, "{}"), Some("jwt-1"));
        block_on(client.request(Method::Get, "/items", NO_BODY)).unwrap();

        let sent = fake.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].header("authorization"), Some("Bearer jwt-1"));
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn no_authorization_without_token() {
        let (client, fake) = client_with(FakeTransport::default(), None);
        block_on(client.request(Method::Get, "/kategori", NO_BODY)).unwrap();
        assert_eq!(fake.sent()[0].header("Authorization"), None);
    }

    #[test]
    fn caller_headers_merge_but_token_wins() {
        let (client, fake) = client_with(FakeTransport::default(), Some("real"));
        block_on(client.request_with_headers(
            Method::Post,
            "/items",
            Some(&json!({"a": 1})),
            &[
                ("content-type", "application/json; charset=utf-8"),
                ("X-Trace", "t1"),
                ("Authorization", "Bearer forged"),
            ],
        ))
        .unwrap();

        let sent = &fake.sent()[0];
        assert_eq!(sent.headers.len(), 3);
        assert_eq!(sent.header("Content-Type"), Some("application/json; charset=utf-8"));
        assert_eq!(sent.header("x-trace"), Some("t1"));
        assert_eq!(sent.header("Authorization"), Some("Bearer real"));
    }

    #[test]
    fn body_is_serialized_as_json() {
        let (client, fake) = client_with(FakeTransport::default(), None);
        block_on(client.send(Method::Put, "/kategori/2", Some(&json!({"nama_kategori": "Dapur"}))))
            .unwrap();
        assert_eq!(fake.sent_json(0), json!({"nama_kategori": "Dapur"}));
    }

    #[test]
    fn empty_success_body_is_empty_result() {
        let (client, _) = client_with(FakeTransport::default().reply(204, ""), None);
        let value = block_on(client.request(Method::Delete, "/items/1", NO_BODY)).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn http_failure_surfaces_server_error() {
        let fake = FakeTransport::default().reply(400, r#"{"error":"Input tidak valid"}"#);
        let (client, _) = client_with(fake, None);
        let err = block_on(client.request(Method::Post, "/items", NO_BODY)).unwrap_err();
        assert_eq!(err.to_string(), "Input tidak valid");
    }

    #[test]
    fn network_failure_is_passed_through() {
        let fake = FakeTransport::default().fail(ApiError::Network("offline".into()));
        let (client, _) = client_with(fake, None);
        let err = block_on(client.get_data::<Vec<Value>>("/items")).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }

    #[test]
    fn get_data_unwraps_envelope() {
        let fake = FakeTransport::default().reply(200, r#"{"data":[{"x":1}]}"#);
        let (client, _) = client_with(fake, None);
        let data: Vec<Value> = block_on(client.get_data("/items")).unwrap();
        assert_eq!(data, vec![json!({"x": 1})]);
    }

    #[test]
    fn missing_or_null_data_is_default() {
        assert_eq!(unwrap_envelope::<Vec<u8>>(None).unwrap(), Vec::<u8>::new());
        assert_eq!(
            unwrap_envelope::<Vec<u8>>(Some(json!({"data": null}))).unwrap(),
            Vec::<u8>::new()
        );
        assert_eq!(
            unwrap_envelope::<Vec<u8>>(Some(json!({"message": "ok"}))).unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn download_keeps_bytes_and_name() {
        let fake = FakeTransport::default().reply_with(HttpResponse {
            status: 200,
            status_text: "OK".into(),
            headers: vec![(
                "content-disposition".into(),
                "attachment; filename=Laporan.xlsx".into(),
            )],
            body: vec![0x50, 0x4b, 0x03, 0x04],
        });
        let (client, fake) = client_with(fake, Some("t"));
        let file = block_on(client.download("/reports/download?type=excel")).unwrap();

        assert_eq!(file.bytes, vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(file.file_name.as_deref(), Some("Laporan.xlsx"));
        assert_eq!(fake.sent()[0].header("Authorization"), Some("Bearer t"));
    }

    #[test]
    fn download_failure_uses_error_body() {
        let fake = FakeTransport::default()
            .reply(501, r#"{"error":"Download PDF belum diimplementasikan"}"#);
        let (client, _) = client_with(fake, None);
        let err = block_on(client.download("/reports/download?type=pdf")).unwrap_err();
        assert_eq!(err.to_string(), "Download PDF belum diimplementasikan");
        assert_eq!(err.status(), Some(501));
    }
}
