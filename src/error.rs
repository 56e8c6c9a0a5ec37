use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api error: {0}")]
    Api(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("profile not found: {0}")]
    ProfileNotFound(String),
    #[error("invalid profile `{name}`: {message}")]
    InvalidProfile { name: String, message: String },
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid number in `{field}`: {value}")]
    InvalidNumber { field: String, value: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
