use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The word-list file is missing or could not be read.
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source contained no words once blanks and comments were skipped.
    #[error("word list {label} is empty")]
    Empty { label: String },
}
