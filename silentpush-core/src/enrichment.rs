// Get enrichment data action: look up a domain or IP in SilentPush

use crate::constants::{
    ACTION_ENRICHMENT_SUCCESS_RESPONSE, ENRICHMENT_DATA_RESOURCE_OPTIONS,
    GET_ENRICHMENT_DATA_ACTION, SUMMARY_TOTAL_ENRICHMENT_DATA, enrichment_endpoint,
    execution_start_message,
};
use crate::error::{ActionError, Result};
use crate::params::{EnrichmentParams, QueryParams, RawParameters, Resource, scalar_to_string};
use crate::result::{ActionResult, ActionStatus};
use crate::validator::{ParameterValidator, Validator};
use serde_json::{Map, Value};
use silentpush_client::{ClientError, Method, RestCall, RestRequest};
use tracing::{debug, info, warn};
use url::form_urlencoded;

const FLAG_PARAMETERS: [&str; 2] = ["explain", "scan_data"];

/// Fetches enrichment data for a domain or IP and shapes it into an
/// [`ActionResult`].
///
/// Pipeline: validate → query params → endpoint → REST call → response.
/// Validation and REST failures short-circuit into a failed result.
pub struct EnrichmentAction<R, V = Validator> {
    rest: R,
    validator: V,
}

impl<R: RestCall> EnrichmentAction<R> {
    pub fn new(rest: R) -> Self {
        Self::with_validator(rest, Validator)
    }
}

impl<R: RestCall, V: ParameterValidator> EnrichmentAction<R, V> {
    pub fn with_validator(rest: R, validator: V) -> Self {
        Self { rest, validator }
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Run the action end to end, recording the outcome in `action_result`.
    pub async fn execute(
        &self,
        parameters: &RawParameters,
        action_result: &mut ActionResult,
    ) -> ActionStatus {
        info!("{}", execution_start_message(GET_ENRICHMENT_DATA_ACTION));

        let params = match self.validate(parameters) {
            Ok(params) => params,
            Err(e) => return fail(action_result, e),
        };

        let query_params = build_query_params(&params);

        let endpoint = match build_endpoint(&params) {
            Ok(endpoint) => endpoint,
            Err(e) => return fail(action_result, e),
        };

        let response = self.invoke(&endpoint, &query_params).await;

        self.handle_response(response, action_result)
    }

    /// Check and normalize the raw parameters.
    pub fn validate(&self, parameters: &RawParameters) -> Result<EnrichmentParams> {
        validate_parameters(&self.validator, parameters)
    }

    /// Delegate the call to the REST helper.
    pub async fn invoke(
        &self,
        endpoint: &Endpoint,
        query_params: &QueryParams,
    ) -> std::result::Result<Value, ClientError> {
        let path = with_query_string(&endpoint.path, query_params);
        debug!(%path, method = %endpoint.method, "invoking enrichment endpoint");

        let request = RestRequest::new(path, endpoint.method)
            .with_error_path(endpoint.resource.error_path());
        self.rest.make_rest_call(request).await
    }

    /// Record the REST outcome: data and summary on success, the error otherwise.
    pub fn handle_response(
        &self,
        response: std::result::Result<Value, ClientError>,
        action_result: &mut ActionResult,
    ) -> ActionStatus {
        let response = match response {
            Ok(response) => response,
            Err(e) => return fail(action_result, ActionError::from(e)),
        };

        let total = total_enrichment_data(&response);
        action_result.add_data(response);

        let mut summary = Map::new();
        summary.insert(SUMMARY_TOTAL_ENRICHMENT_DATA.to_string(), Value::from(total));
        action_result.update_summary(summary);

        info!(total, "enrichment data fetched");
        action_result.set_status(ActionStatus::Success, ACTION_ENRICHMENT_SUCCESS_RESPONSE)
    }
}

/// Check and normalize raw parameters with `validator`.
pub fn validate_parameters<V: ParameterValidator>(
    validator: &V,
    parameters: &RawParameters,
) -> Result<EnrichmentParams> {
    let mut params = EnrichmentParams::default();

    if let Some(raw) = parameters.get("resource").and_then(scalar_to_string) {
        let canonical =
            validator.validate_dropdown(&raw, "resource", ENRICHMENT_DATA_RESOURCE_OPTIONS)?;
        params.resource = canonical.parse::<Resource>().ok();
    }

    params.value = parameters.get("value").and_then(scalar_to_string);

    for field in FLAG_PARAMETERS {
        let Some(raw) = parameters.get(field).filter(|v| !v.is_null()) else {
            continue;
        };
        let flag = validator.validate_flag(raw, field)?;
        match field {
            "explain" => params.explain = Some(flag),
            _ => params.scan_data = Some(flag),
        }
    }

    debug!(?params, "validated parameters");
    Ok(params)
}

/// Copy the optional flags that are present into the query string map.
pub fn build_query_params(params: &EnrichmentParams) -> QueryParams {
    let mut query = QueryParams::new();
    if let Some(explain) = params.explain {
        query.insert("explain", explain);
    }
    if let Some(scan_data) = params.scan_data {
        query.insert("scan_data", scan_data);
    }
    query
}

/// A resolved enrichment endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the server URL, without a query string.
    pub path: String,
    pub method: Method,
    /// Selects the error path the REST helper inspects.
    pub resource: Resource,
}

/// Resolve the endpoint. Both `resource` and `value` are required.
pub fn build_endpoint(params: &EnrichmentParams) -> Result<Endpoint> {
    let resource = params
        .resource
        .ok_or_else(|| ActionError::MissingParameter("resource".into()))?;
    let value = params
        .value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ActionError::MissingParameter("value".into()))?;

    Ok(Endpoint {
        path: enrichment_endpoint(resource.as_str(), value),
        method: Method::Get,
        resource,
    })
}

/// Number of `response.ip2asn` records, or 1 when the list is missing or empty.
pub fn total_enrichment_data(response: &Value) -> usize {
    match response.pointer("/response/ip2asn") {
        Some(Value::Array(items)) if !items.is_empty() => items.len(),
        _ => 1,
    }
}

fn with_query_string(endpoint: &str, query_params: &QueryParams) -> String {
    if query_params.is_empty() {
        return endpoint.to_string();
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query_params.iter().map(|(k, v)| (*k, v.to_string())))
        .finish();
    format!("{}?{}", endpoint, query)
}

fn fail(action_result: &mut ActionResult, error: ActionError) -> ActionStatus {
    warn!(%error, "{} failed", GET_ENRICHMENT_DATA_ACTION);
    action_result.set_status(ActionStatus::Failed, error.to_string())
}
