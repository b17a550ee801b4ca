/// Default base URL of the SilentPush merge API.
pub const DEFAULT_SERVER_URL: &str = "https://app.silentpush.com/api/v1/merge-api/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Settings for the REST helper.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub api_key: String,
    pub verify_server_cert: bool,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_key: api_key.into(),
            verify_server_cert: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the base URL (a mock server in tests).
    #[must_use]
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub fn with_verify_server_cert(mut self, verify: bool) -> Self {
        self.verify_server_cert = verify;
        self
    }
}
