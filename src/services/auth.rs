use crate::api::{ApiClient, Method};
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};

/// Signs in and stores the returned token in the client's session.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> ApiResult<Option<UserProfile>> {
    let value = api.request(Method::Post, "/login", Some(request)).await?;
    let resp: LoginResponse = match value {
        Some(value) => serde_json::from_value(value)?,
        None => LoginResponse::default(),
    };

    let token = resp
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("Token not received from server."))?;
    api.session().sign_in(&token)?;
    log::info!("signed in as {}", request.username);
    Ok(resp.user)
}

/// Creates an account; returns the server's confirmation text.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> ApiResult<String> {
    let value = api.request(Method::Post, "/register", Some(request)).await?;
    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or("Registration successful.")
        .to_string();
    log::info!("registered account {}", request.username);
    Ok(message)
}

/// Drops the stored token. There is no logout endpoint.
pub fn logout(api: &ApiClient) {
    api.session().sign_out();
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::api::transport::fake::FakeTransport;
    use crate::config::AppConfig;
    use crate::session::Session;

    fn client(fake: FakeTransport) -> (ApiClient, Rc<FakeTransport>) {
        let fake = Rc::new(fake);
        let api = ApiClient::new(&AppConfig::default(), Session::in_memory(), fake.clone());
        (api, fake)
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            username: "sari".into(),
            password: "rahasia".into(),
        }
    }

    #[test]
    fn login_stores_token_and_returns_user() {
        let (api, fake) = client(FakeTransport::default().reply(
            200,
            r#"{"message":"Login berhasil!","token":"jwt-9","user":{"id":1,"username":"sari","nama":"Sari","email":"s@x.id","role":"member"}}"#,
        ));

        let user = block_on(login(&api, &credentials())).unwrap().unwrap();

        assert_eq!(user.username, "sari");
        assert_eq!(api.session().token().as_deref(), Some("jwt-9"));
        let sent = fake.sent();
        assert_eq!(sent[0].url, "http://localhost:8080/api/v1/login");
        assert_eq!(sent[0].header("Authorization"), None);
        assert_eq!(fake.sent_json(0), json!({"username": "sari", "password": "rahasia"}));
    }

    #[test]
    fn login_without_token_fails_and_stays_signed_out() {
        let (api, _) = client(FakeTransport::default().reply(200, r#"{"message":"ok"}"#));
        let err = block_on(login(&api, &credentials())).unwrap_err();
        assert_eq!(err.to_string(), "Token not received from server.");
        assert!(!api.session().is_authenticated());
    }

    #[test]
    fn rejected_login_surfaces_server_text() {
        let (api, _) = client(
            FakeTransport::default().reply(401, r#"{"error":"Username atau password salah"}"#),
        );
        let err = block_on(login(&api, &credentials())).unwrap_err();
        assert_eq!(err.to_string(), "Username atau password salah");
    }

    #[test]
    fn register_returns_server_message() {
        let (api, fake) =
            client(FakeTransport::default().reply(201, r#"{"message":"Registrasi berhasil"}"#));
        let request = RegisterRequest {
            username: "sari".into(),
            password: "rahasia".into(),
            name: "Sari".into(),
            email: "s@x.id".into(),
        };
        assert_eq!(block_on(register(&api, &request)).unwrap(), "Registrasi berhasil");
        assert_eq!(fake.sent()[0].method, Method::Post);
        assert_eq!(fake.sent_json(0)["email"], "s@x.id");
    }

    #[test]
    fn logout_clears_token_without_network() {
        let (api, fake) = client(FakeTransport::default());
        api.session().sign_in("jwt").unwrap();
        logout(&api);
        assert!(!api.session().is_authenticated());
        assert!(fake.sent().is_empty());
    }
}
