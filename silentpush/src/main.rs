use colored::Colorize;
use silentpush::command_argument_builder;
use silentpush::handlers::{handle_enrich, init_tracing};

#[tokio::main]
async fn main() {
    let chosen_command = command_argument_builder().get_matches();
    let quiet = chosen_command.get_flag("quiet");
    init_tracing(chosen_command.get_flag("verbose"));

    let outcome = match chosen_command.subcommand() {
        Some(("enrich", primary_command)) => handle_enrich(primary_command, quiet).await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    match outcome {
        Ok(status) if status.is_success() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
