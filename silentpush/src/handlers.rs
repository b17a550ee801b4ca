use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use serde_json::Value;
use silentpush_client::{ClientConfig, RestClient};
use silentpush_core::config::{API_KEY_ENV_VAR, ConnectorConfig};
use silentpush_core::{
    ActionResult, ActionStatus, EnrichmentAction, RawParameters, Validator, build_endpoint,
    validate_parameters,
};
use std::fs;
use std::path::PathBuf;
use tracing::{Level, warn};

/// Flags that map one-to-one onto action parameter keys.
const PARAMETER_FLAGS: [(&str, &str); 4] = [
    ("resource", "resource"),
    ("value", "value"),
    ("explain", "explain"),
    ("scan-data", "scan_data"),
];

pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Parse a `--params` JSON object.
pub fn parse_params_json(raw: &str) -> Result<RawParameters> {
    let value: Value = serde_json::from_str(raw).context("--params is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("--params must be a JSON object, got {}", other),
    }
}

/// Assemble action parameters: `--params` first, individual flags on top.
pub fn collect_parameters(args: &ArgMatches) -> Result<RawParameters> {
    let mut parameters = match args.get_one::<String>("params") {
        Some(raw) => parse_params_json(raw)?,
        None => RawParameters::new(),
    };

    for (flag, key) in PARAMETER_FLAGS {
        if let Some(value) = args.get_one::<String>(flag) {
            parameters.insert(key.to_string(), Value::String(value.clone()));
        }
    }

    Ok(parameters)
}

/// Resolve the REST client settings from the config file, flags and the
/// API key taken from the environment.
pub fn load_client_config(args: &ArgMatches, env_api_key: Option<&str>) -> Result<ClientConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => ConnectorConfig::load_or_default(path)?,
        None => ConnectorConfig::default(),
    };

    if let Some(server_url) = args.get_one::<String>("server-url") {
        config.server_url = server_url.clone();
    }
    if let Some(timeout) = args.get_one::<u64>("timeout") {
        config.timeout_secs = *timeout;
    }
    if args.get_flag("insecure") {
        config.verify_server_cert = false;
    }

    Ok(config.to_client_config(env_api_key)?)
}

/// Run the enrichment action and return its populated result.
///
/// Parameters are checked before the API key and client are resolved, so a
/// bad invocation reports the parameter problem rather than a config one.
pub async fn run_enrich(args: &ArgMatches, env_api_key: Option<&str>) -> Result<ActionResult> {
    let parameters = collect_parameters(args)?;

    let checked = validate_parameters(&Validator, &parameters).and_then(|p| build_endpoint(&p));
    if let Err(error) = checked {
        warn!(%error, "rejecting parameters before connecting");
        let mut action_result = ActionResult::new();
        action_result.set_status(ActionStatus::Failed, error.to_string());
        return Ok(action_result);
    }

    let client_config = load_client_config(args, env_api_key)?;
    let client = RestClient::new(client_config).context("Failed to create REST client")?;

    let action = EnrichmentAction::new(client);
    let mut action_result = ActionResult::new();
    action.execute(&parameters, &mut action_result).await;

    Ok(action_result)
}

pub fn render_result(result: &ActionResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize action result")
}

pub fn status_line(result: &ActionResult) -> String {
    match result.get_status() {
        ActionStatus::Success => format!("{} {}", "✓".green().bold(), result.message()),
        ActionStatus::Failed => format!("{} {}", "✗".red().bold(), result.message()),
    }
}

pub async fn handle_enrich(args: &ArgMatches, quiet: bool) -> Result<ActionStatus> {
    let env_api_key = std::env::var(API_KEY_ENV_VAR).ok();
    let result = run_enrich(args, env_api_key.as_deref()).await?;

    let rendered = render_result(&result)?;
    match args.get_one::<PathBuf>("output") {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write result to {}", path.display()))?;
            if !quiet {
                eprintln!("{} Result written to {}", "→".blue(), path.display());
            }
        }
        None => println!("{}", rendered),
    }

    if !quiet {
        eprintln!("{}", status_line(&result));
    }

    Ok(result.get_status())
}
