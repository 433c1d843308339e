use log::LevelFilter;
use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Build-time settings for the client.
///
/// Values can be overridden when compiling (for example through trunk):
/// `BMG_API_BASE_URL`, `BMG_TOKEN_KEY` and `BMG_LOG_LEVEL`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("BMG_API_BASE_URL"),
            option_env!("BMG_TOKEN_KEY"),
            option_env!("BMG_LOG_LEVEL"),
        )
    }

    fn from_overrides(
        base_url: Option<&str>,
        token_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            api_base_url: pick(base_url, defaults.api_base_url),
            token_key: pick(token_key, defaults.token_key),
            log_level: pick(log_level, defaults.log_level),
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = AppConfig::from_overrides(None, None, None);
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.token_key, "authToken");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = AppConfig::from_overrides(Some("  "), Some(""), Some("debug"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base_url":"https://bmg.example/api/v1"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://bmg.example/api/v1");
        assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
    }
}
