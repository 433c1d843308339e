/// Everything a page can surface to the user.
///
/// `Http` carries the server's own message when one was sent, which is
/// why its display is the bare message.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("The server sent an unreadable response.")]
    Parse(String),

    #[error("Browser storage is unavailable: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_server_message_verbatim() {
        let err = ApiError::Http {
            status: 400,
            message: "Nama item tidak boleh kosong".to_string(),
        };
        assert_eq!(err.to_string(), "Nama item tidak boleh kosong");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn parse_error_hides_details() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert_eq!(err.to_string(), "The server sent an unreadable response.");
        assert_eq!(err.status(), None);
    }
}
