use serde::Deserialize;

/// One post from a user's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub text: String,
}

/// Subset of a v1.1 status object.
///
/// `full_text` is only present when the request asks for `tweet_mode=extended`.
#[derive(Debug, Deserialize)]
pub(crate) struct Status {
    pub id_str: String,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl From<Status> for Post {
    fn from(status: Status) -> Self {
        Post {
            id: status.id_str,
            text: status.full_text.or(status.text).unwrap_or_default(),
        }
    }
}
