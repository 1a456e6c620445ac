//! Word-list sentiment scoring for tweetmood.
//!
//! Loads a positive and a negative word list once, then scores short texts by
//! counting whitespace tokens that appear in each list. Scores are aggregated
//! into positive/negative/neutral tallies for charting.

pub mod error;
pub mod scorer;
pub mod types;
pub mod word_set;

pub use error::LoadError;
pub use scorer::{tokenize, Analyzer};
pub use types::{Score, Sentiment, Tally};
pub use word_set::WordSet;
