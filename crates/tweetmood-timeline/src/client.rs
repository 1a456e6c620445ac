//! HTTP client for the v1.1 `statuses/user_timeline` endpoint.
//!
//! Wraps `reqwest` with bearer-token auth and maps the API's "no such user"
//! and "protected account" responses onto [`TimelineError::UserNotFound`].

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::TimelineError;
use crate::types::{Post, Status};

const DEFAULT_BASE_URL: &str = "https://api.twitter.com/";
const USER_TIMELINE_PATH: &str = "1.1/statuses/user_timeline.json";

/// Largest page the timeline endpoint returns in a single request.
pub const MAX_TIMELINE_COUNT: u32 = 200;

const MAX_SCREEN_NAME_LEN: usize = 15;

/// Strips an optional leading `@` and validates the result.
///
/// Screen names are 1-15 ASCII letters, digits or underscores. Returns `None`
/// for anything else.
#[must_use]
pub fn normalize_screen_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    let name = name.strip_prefix('@').unwrap_or(name);
    let valid = !name.is_empty()
        && name.len() <= MAX_SCREEN_NAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(name)
}

/// Client for fetching user timelines.
///
/// Use [`TimelineClient::new`] for production or
/// [`TimelineClient::with_base_url`] to point at a mock server in tests.
pub struct TimelineClient {
    client: Client,
    bearer_token: String,
    base_url: Url,
}

impl TimelineClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(bearer_token: &str, timeout_secs: u64) -> Result<Self, TimelineError> {
        Self::with_base_url(bearer_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TimelineError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        bearer_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, TimelineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tweetmood/0.1")
            .build()?;

        // Exactly one trailing slash so `Url::join` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TimelineError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            bearer_token: bearer_token.to_owned(),
            base_url,
        })
    }

    /// Fetches up to `count` of the user's most recent posts, newest first.
    ///
    /// `count` is clamped to `1..=MAX_TIMELINE_COUNT`.
    ///
    /// # Errors
    ///
    /// - [`TimelineError::UserNotFound`] if the name is malformed, unknown, or
    ///   the account is protected. Malformed names never hit the network.
    /// - [`TimelineError::RateLimited`] on HTTP 429.
    /// - [`TimelineError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`TimelineError::Http`] on network failure.
    /// - [`TimelineError::Deserialize`] if the body is not a list of statuses.
    pub async fn fetch_user_timeline(
        &self,
        screen_name: &str,
        count: u32,
    ) -> Result<Vec<Post>, TimelineError> {
        let Some(name) = normalize_screen_name(screen_name) else {
            tracing::debug!(screen_name, "rejecting malformed screen name");
            return Err(TimelineError::UserNotFound {
                screen_name: screen_name.to_string(),
            });
        };

        let count = count.clamp(1, MAX_TIMELINE_COUNT);
        let url = self.build_url(name, count)?;

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND | StatusCode::UNAUTHORIZED => {
                tracing::info!(screen_name = name, status = %response.status(), "timeline unavailable");
                return Err(TimelineError::UserNotFound {
                    screen_name: name.to_string(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!(screen_name = name, "timeline request rate limited");
                return Err(TimelineError::RateLimited {
                    screen_name: name.to_string(),
                });
            }
            status => {
                return Err(TimelineError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: redact(&url),
                });
            }
        }

        let body = response.text().await?;
        let statuses: Vec<Status> =
            serde_json::from_str(&body).map_err(|e| TimelineError::Deserialize {
                context: format!("user_timeline(screen_name={name})"),
                source: e,
            })?;

        tracing::debug!(screen_name = name, count = statuses.len(), "fetched timeline");
        Ok(statuses.into_iter().map(Post::from).collect())
    }

    fn build_url(&self, screen_name: &str, count: u32) -> Result<Url, TimelineError> {
        let mut url =
            self.base_url
                .join(USER_TIMELINE_PATH)
                .map_err(|e| TimelineError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        url.query_pairs_mut()
            .append_pair("screen_name", screen_name)
            .append_pair("count", &count.to_string())
            .append_pair("tweet_mode", "extended");
        Ok(url)
    }
}

/// URL without its query string, for error messages.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}
