use crate::config::{API_KEY_HEADER, ClientConfig};
use crate::error::{ClientError, Result};
use crate::error_path;
use crate::request::{RestCall, RestRequest};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("silentpush-connector/", env!("CARGO_PKG_VERSION"));

/// Longest slice of a raw body quoted back in an error message.
const MAX_SNIPPET_CHARS: usize = 500;

/// reqwest-backed REST helper shared by every connector action.
pub struct RestClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ClientError::Config("an API key is required".to_string()));
        }

        let base_url = Self::parse_base_url(&config.server_url)?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs((config.timeout_secs / 2).max(1)))
            .danger_accept_invalid_certs(!config.verify_server_cert)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    fn parse_base_url(server_url: &str) -> Result<Url> {
        // Url::join drops the last path segment unless the base ends in '/'
        let normalized = format!("{}/", server_url.trim().trim_end_matches('/'));
        let url = Url::parse(&normalized)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", server_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ClientError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                server_url, scheme
            ))),
        }
    }

    /// Absolute URL for an endpoint relative to the server URL.
    pub fn url_for(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

impl RestCall for RestClient {
    async fn make_rest_call(&self, request: RestRequest) -> Result<Value> {
        let url = self.url_for(&request.endpoint)?;
        debug!(method = %request.method, %url, "calling SilentPush API");

        let mut builder = self
            .client
            .request(request.method.into(), url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json");

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(status, bytes = text.len(), "received API response");

        process_response(status, &text, request.error_path.as_deref())
    }
}

/// Turn a raw HTTP reply into the JSON payload or a [`ClientError`].
pub fn process_response(status: u16, body: &str, error_field: Option<&str>) -> Result<Value> {
    let success = (200..300).contains(&status);

    if body.trim().is_empty() {
        if success {
            return Ok(Value::Object(Map::new()));
        }
        return Err(ClientError::Status {
            status,
            message: "empty response body".to_string(),
        });
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if success => {
            return Err(ClientError::InvalidJson(format!("{}: {}", e, snippet(body))));
        }
        Err(_) => {
            return Err(ClientError::Status {
                status,
                message: snippet(body),
            });
        }
    };

    let reported = error_path::error_message(&parsed, "error")
        .or_else(|| error_field.and_then(|path| error_path::error_message(&parsed, path)));

    if !success {
        return Err(ClientError::Status {
            status,
            message: reported.unwrap_or_else(|| snippet(body)),
        });
    }

    if let Some(message) = reported {
        warn!(error = %message, "API reported an error on a successful response");
        return Err(ClientError::Api(message));
    }

    Ok(parsed)
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_SNIPPET_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(MAX_SNIPPET_CHARS).collect();
    cut.push_str("...");
    cut
}
