use clap::Parser;
use console::style;
use mtg::{app, cli::Cli, error::exit_code, error::MtgError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", style(format!("Error: {err:#}")).red().bold());
            let code = err
                .downcast_ref::<MtgError>()
                .map(MtgError::exit_code)
                .unwrap_or(exit_code::FAILURE);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
