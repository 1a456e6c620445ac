use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("TWEETMOOD_ENV", "development"))?;
    let bind_addr = parse_addr("TWEETMOOD_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("TWEETMOOD_LOG_LEVEL", "info");
    let positive_words_path = PathBuf::from(or_default(
        "TWEETMOOD_POSITIVE_WORDS",
        "./data/positive-words.txt",
    ));
    let negative_words_path = PathBuf::from(or_default(
        "TWEETMOOD_NEGATIVE_WORDS",
        "./data/negative-words.txt",
    ));

    let timeline_count = parse_u32("TWEETMOOD_TIMELINE_COUNT", "100")?;
    if timeline_count == 0 {
        return Err(invalid(
            "TWEETMOOD_TIMELINE_COUNT",
            "must be at least 1".to_string(),
        ));
    }
    let request_timeout_secs = parse_u64("TWEETMOOD_REQUEST_TIMEOUT_SECS", "10")?;

    let twitter_api_base_url = or_default("TWITTER_API_BASE_URL", "https://api.twitter.com/");
    let twitter_bearer_token = lookup("TWITTER_BEARER_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty());

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        positive_words_path,
        negative_words_path,
        timeline_count,
        request_timeout_secs,
        twitter_api_base_url,
        twitter_bearer_token,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TWEETMOOD_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
