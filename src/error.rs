use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostic::Diagnostic;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid answers in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("no answers found at {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the survey is already complete")]
    Completed,
    #[error("unknown step {0}")]
    NoSuchStep(String),
    #[error("{} answer(s) need attention", .0.len())]
    Validation(Vec<Diagnostic>),
}
