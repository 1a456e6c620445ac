use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub positive_words_path: PathBuf,
    pub negative_words_path: PathBuf,
    pub timeline_count: u32,
    pub request_timeout_secs: u64,
    pub twitter_api_base_url: String,
    pub twitter_bearer_token: Option<String>,
}

impl AppConfig {
    /// Returns the Twitter API bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `TWITTER_BEARER_TOKEN` was not set.
    pub fn require_twitter_bearer_token(&self) -> Result<&str, ConfigError> {
        self.twitter_bearer_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("TWITTER_BEARER_TOKEN".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("positive_words_path", &self.positive_words_path)
            .field("negative_words_path", &self.negative_words_path)
            .field("timeline_count", &self.timeline_count)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("twitter_api_base_url", &self.twitter_api_base_url)
            .field(
                "twitter_bearer_token",
                &self.twitter_bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
