pub mod client;
pub mod config;
pub mod error;
pub mod error_path;
pub mod request;

pub use client::RestClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use request::{Method, RestCall, RestRequest};
