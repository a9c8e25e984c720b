use std::num::ParseIntError;
use std::string::FromUtf8Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid number {value:?}: {source}")]
    Number {
        value: String,
        source: ParseIntError,
    },

    /// The page or endpoint answered, but nothing in it looked like a record.
    #[error("no {0} found in response")]
    NoMatches(&'static str),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
