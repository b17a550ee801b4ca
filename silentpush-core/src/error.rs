use silentpush_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Please provide a valid value in the '{field}' parameter. Allowed values: {allowed}")]
    InvalidParameter { field: String, allowed: String },

    #[error("Please provide a valid boolean value in the '{field}' parameter, got '{value}'")]
    MalformedParameter { field: String, value: String },

    #[error("Missing required parameter '{0}'")]
    MissingParameter(String),

    #[error(transparent)]
    RemoteCall(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, ActionError>;
