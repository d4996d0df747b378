use http_client::http_types;
use thiserror::Error;

pub type APIResult<T> = Result<T, APIError>;

#[derive(Debug, Error)]
pub enum APIError {
    #[error("HTTP error : {0}")]
    Http(http_types::Error),
    #[error("Bad request : {0}")]
    BadRequest(String),
    #[error("QuickBooks API rate limit : {0}")]
    RateLimited(String),
    #[error("Could not parse URL : {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("JSON error : {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing environment variable : {0}")]
    EnvVar(#[from] std::env::VarError),
    #[error("IO error : {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown report : {0}")]
    UnknownReport(String),
    #[error("Invalid date, expected YYYY-MM-DD : {0}")]
    InvalidDate(String),
}

// http_types::Error does not implement std::error::Error
impl From<http_types::Error> for APIError {
    fn from(value: http_types::Error) -> Self {
        Self::Http(value)
    }
}
