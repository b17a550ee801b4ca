use clap::{arg, command};
use silentpush_core::config::DEFAULT_CONFIG_PATH;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("silentpush")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("silentpush")
        .about("Run SilentPush connector actions from the command line")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress the status line; print only the result JSON")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose" "Log requests and responses to stderr")
                .required(false)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            command!("enrich")
                .about("Get enrichment data for a domain or IP")
                .arg(
                    arg!(-r --"resource" <RESOURCE>)
                        .required(false)
                        .help("Indicator type to enrich: domain or ip"),
                )
                .arg(
                    arg!(--"value" <VALUE>)
                        .required(false)
                        .help("The domain or IP address to look up"),
                )
                .arg(
                    arg!(--"explain" <BOOL>)
                        .required(false)
                        .help("Include the scoring explanation (true/false, 1/0)"),
                )
                .arg(
                    arg!(--"scan-data" <BOOL>)
                        .required(false)
                        .help("Include host scan data (true/false, 1/0)"),
                )
                .arg(
                    arg!(-p --"params" <JSON>)
                        .required(false)
                        .help("Raw action parameters as a JSON object; flags override its keys"),
                )
                .arg(
                    arg!(-c --"config" <PATH>)
                        .required(false)
                        .help("Connector config file")
                        .default_value(DEFAULT_CONFIG_PATH),
                )
                .arg(
                    arg!(--"server-url" <URL>)
                        .required(false)
                        .help("Override the SilentPush API base URL"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--"insecure")
                        .required(false)
                        .help("Skip TLS certificate verification")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the result JSON to a file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}
