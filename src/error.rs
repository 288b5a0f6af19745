use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to decode problem stats: {0}")]
    Stats(#[source] serde_json::Error),

    #[error("failed to parse problem content: {0}")]
    Content(String),

    #[error(
        "invalid language '{language}' for problem: '{title}' with supported language:\n[{}]",
        .supported.join(", ")
    )]
    LanguageMismatch {
        language: String,
        title: String,
        supported: Vec<String>,
    },

    #[error("question {question_id} does not support file format {ext}")]
    UnsupportedFormat { question_id: String, ext: String },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
