pub mod config;
pub mod constants;
pub mod enrichment;
pub mod error;
pub mod params;
pub mod result;
pub mod validator;

pub use enrichment::{
    Endpoint, EnrichmentAction, build_endpoint, build_query_params, total_enrichment_data,
    validate_parameters,
};
pub use error::ActionError;
pub use params::{EnrichmentParams, QueryParams, RawParameters, Resource};
pub use result::{ActionResult, ActionStatus};
pub use validator::{ParameterValidator, Validator};
