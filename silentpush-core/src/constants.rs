// Endpoints, messages and option lists shared by connector actions

pub const GET_ENRICHMENT_DATA_ACTION: &str = "get_enrichment_data";

pub const ENRICHMENT_DATA_RESOURCE_OPTIONS: &[&str] = &["domain", "ip"];

pub const DOMAIN_ERROR_PATH: &str = "response.domaininfo.error";
pub const IP_ERROR_PATH: &str = "response.ip2asn.0.error";

pub const ACTION_ENRICHMENT_SUCCESS_RESPONSE: &str = "Successfully fetched enrichment data";

pub const SUMMARY_TOTAL_ENRICHMENT_DATA: &str = "total_enrichment_data";

pub fn execution_start_message(action: &str) -> String {
    format!("Executing {} action", action)
}

/// Path of the enrichment endpoint, relative to the server URL.
pub fn enrichment_endpoint(resource: &str, value: &str) -> String {
    format!("explore/enrich/{resource}/{value}")
}
