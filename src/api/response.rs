use serde::Deserialize;
use serde_json::Value;

use super::transport::HttpResponse;
use crate::error::{ApiError, ApiResult};

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Turns a raw response into the JSON body, if any.
///
/// Non-2xx answers become [`ApiError::Http`]; an empty 2xx body is `None`.
pub fn read_json(resp: &HttpResponse) -> ApiResult<Option<Value>> {
    ensure_success(resp)?;

    let text = String::from_utf8_lossy(&resp.body);
    if text.trim().is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_str(&text)?;
    Ok(Some(value))
}

pub fn ensure_success(resp: &HttpResponse) -> ApiResult<()> {
    if resp.ok() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: resp.status,
        message: error_message(resp),
    })
}

fn error_message(resp: &HttpResponse) -> String {
    let from_body = serde_json::from_slice::<ErrorBody>(&resp.body)
        .ok()
        .and_then(|body| non_empty_text(body.message).or_else(|| non_empty_text(body.error)));

    from_body.unwrap_or_else(|| {
        let reason = resp.status_text.trim();
        if reason.is_empty() {
            format!("HTTP {}", resp.status)
        } else {
            format!("HTTP {}: {}", resp.status, reason)
        }
    })
}

fn non_empty_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

/// File name from `Content-Disposition`, quoted or bare.
pub fn attachment_name(resp: &HttpResponse) -> Option<String> {
    let header = resp.header("content-disposition")?;
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim().trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
