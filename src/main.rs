use riskscan::{
    cli::{Cli, CliHandler, ReportFormatter},
    error::CliError,
};
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    let default_filter = if cli.is_debug() {
        "riskscan=debug"
    } else if cli.is_verbose() {
        "riskscan=info"
    } else {
        "riskscan=warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(CliError::Informational(e)) => e.exit(),
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    init_tracing(&cli);

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", ReportFormatter::plain().format_error(&e));
            match e {
                CliError::InvalidArguments(_) => 2,
                CliError::Analysis(_) => 5,     // LLM service error
                _ => 1,
            }
        }
    };

    process::exit(exit_code);
}
