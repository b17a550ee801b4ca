use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
