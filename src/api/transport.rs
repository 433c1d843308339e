use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use crate::error::{ApiError, ApiResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully prepared request: absolute URL, final headers, serialized body.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Sends one request and hands back whatever the server answered.
///
/// Only failures to get any response at all are errors here; status
/// handling belongs to the caller.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Browser `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

/// Response headers worth keeping; the rest are never read.
const KEPT_HEADERS: [&str; 2] = ["content-type", "content-disposition"];

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|err| ApiError::Network(err.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let headers = KEPT_HEADERS
            .iter()
            .filter_map(|name| {
                resp.headers()
                    .get(name)
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        let body = resp
            .binary()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(HttpResponse {
            status: resp.status(),
            status_text: resp.status_text(),
            headers,
            body,
        })
    }
}
