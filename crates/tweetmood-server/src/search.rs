//! Timeline search, independent of HTTP.
//!
//! A validated [`SearchRequest`] goes in, a [`SearchReport`] comes out. The
//! HTML and JSON handlers only translate requests and outcomes.

use tweetmood_analyzer::Tally;
use tweetmood_timeline::{normalize_screen_name, TimelineError};

use crate::api::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub screen_name: String,
}

impl SearchRequest {
    /// Validates a raw `screen_name` query value.
    ///
    /// Returns `None` when the value is missing, blank, or not a valid
    /// screen name.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.and_then(normalize_screen_name).map(|name| Self {
            screen_name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub screen_name: String,
    pub tally: Tally,
}

#[derive(Debug)]
pub enum SearchError {
    /// The timeline source has no such (public) user.
    NotFound,
    Upstream(TimelineError),
}

/// Fetches the user's recent posts and tallies their sentiment.
///
/// # Errors
///
/// Returns [`SearchError::NotFound`] for unknown or protected users and
/// [`SearchError::Upstream`] for any other timeline failure.
pub async fn run_search(
    state: &AppState,
    request: &SearchRequest,
) -> Result<SearchReport, SearchError> {
    let posts = state
        .timeline
        .fetch_user_timeline(&request.screen_name, state.timeline_count)
        .await
        .map_err(|e| match e {
            TimelineError::UserNotFound { .. } => SearchError::NotFound,
            other => SearchError::Upstream(other),
        })?;

    let tally = state.analyzer.tally(posts.iter().map(|post| &post.text));
    tracing::info!(
        screen_name = %request.screen_name,
        posts = posts.len(),
        positive = tally.positive,
        negative = tally.negative,
        neutral = tally.neutral,
        "timeline scored"
    );

    Ok(SearchReport {
        screen_name: request.screen_name.clone(),
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_names() {
        assert_eq!(
            SearchRequest::parse(Some("@cs50")),
            Some(SearchRequest {
                screen_name: "cs50".to_string()
            })
        );
    }

    #[test]
    fn parse_rejects_missing_or_blank() {
        assert_eq!(SearchRequest::parse(None), None);
        assert_eq!(SearchRequest::parse(Some("")), None);
        assert_eq!(SearchRequest::parse(Some("   ")), None);
        assert_eq!(SearchRequest::parse(Some("no spaces allowed")), None);
    }
}
