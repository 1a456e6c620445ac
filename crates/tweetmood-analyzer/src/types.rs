use serde::Serialize;

/// Positive-word matches minus negative-word matches for one text.
pub type Score = i64;

/// Classification of a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        match score.cmp(&0) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    /// Short face used by the CLI.
    #[must_use]
    pub fn emoticon(self) -> &'static str {
        match self {
            Sentiment::Positive => ":)",
            Sentiment::Negative => ":(",
            Sentiment::Neutral => ":|",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-class post counts for one timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl Tally {
    /// Counts one scored post.
    pub fn record(&mut self, score: Score) {
        match Sentiment::from_score(score) {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl FromIterator<Score> for Tally {
    fn from_iter<I: IntoIterator<Item = Score>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for score in iter {
            tally.record(score);
        }
        tally
    }
}
