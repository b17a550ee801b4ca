use crate::constants::{DOMAIN_ERROR_PATH, IP_ERROR_PATH};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Action parameters as the platform hands them over: string keys, scalar values.
pub type RawParameters = Map<String, Value>;

/// Query string parameters, keyed by their wire name.
pub type QueryParams = BTreeMap<&'static str, u8>;

/// Indicator kinds the enrichment endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Domain,
    Ip,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Domain => "domain",
            Resource::Ip => "ip",
        }
    }

    /// Where the API reports a lookup error for this resource.
    pub fn error_path(&self) -> &'static str {
        match self {
            Resource::Domain => DOMAIN_ERROR_PATH,
            Resource::Ip => IP_ERROR_PATH,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domain" => Ok(Resource::Domain),
            "ip" => Ok(Resource::Ip),
            other => Err(format!("unknown resource '{}'", other)),
        }
    }
}

/// Validated parameters of the get enrichment data action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentParams {
    pub resource: Option<Resource>,
    pub value: Option<String>,
    pub explain: Option<u8>,
    pub scan_data: Option<u8>,
}

impl EnrichmentParams {
    pub fn new(resource: Resource, value: impl Into<String>) -> Self {
        Self {
            resource: Some(resource),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = Some(u8::from(explain));
        self
    }

    #[must_use]
    pub fn with_scan_data(mut self, scan_data: bool) -> Self {
        self.scan_data = Some(u8::from(scan_data));
        self
    }
}

/// Render a scalar parameter as the string the endpoint expects.
///
/// `null` counts as absent; strings are taken verbatim.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
