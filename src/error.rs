use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BorgError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("phrase chance must be within [0, 1], got {0}")]
    InvalidChance(f64),

    #[error("phrase chance is {0} but the lexicon has no flavor phrases")]
    EmptyPhrasePool(f64),

    #[error("idiom #{0} has an empty source phrase")]
    EmptyIdiom(usize),

    #[error("invalid idiom pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, BorgError>;
