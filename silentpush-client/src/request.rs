use crate::error::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

/// HTTP verbs the connector issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Lowercase verb name, as the connector actions report it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// One call through the shared REST helper.
#[derive(Debug, Clone)]
pub struct RestRequest {
    /// Path relative to the configured server URL, query string included.
    pub endpoint: String,
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    /// Dotted path where the API reports a per-request error on a 2xx reply.
    pub error_path: Option<String>,
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn new(endpoint: impl Into<String>, method: Method) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            headers: BTreeMap::new(),
            error_path: None,
            body: None,
        }
    }

    #[must_use]
    pub fn with_error_path(mut self, path: impl Into<String>) -> Self {
        self.error_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The REST-call capability actions are handed.
///
/// Implemented by [`crate::RestClient`] for real traffic and by test doubles
/// in action tests. Not object-safe; actions take it as a generic.
pub trait RestCall: Send + Sync {
    fn make_rest_call(&self, request: RestRequest) -> impl Future<Output = Result<Value>> + Send;
}
