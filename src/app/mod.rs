use crate::cli::Cli;
use crate::config::{Config, ConfigOptions};
use crate::dispatch::Dispatcher;
use crate::error::MtgError;
use crate::global;
use crate::launcher::{Platform, ProcessRunner, SystemRunner};
use crate::link::Provider;
use crate::registry::MeetingRegistry;
use crate::selector::{FuzzySelector, MeetingSelector};
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Resolve config file locations from CLI overrides and defaults.
pub fn config_options(cli: &Cli) -> Result<ConfigOptions> {
    let path = match &cli.env_file {
        Some(path) => path.clone(),
        None => global::env_file()?,
    };
    let example = match &cli.defaults_file {
        Some(path) => path.clone(),
        None => path.with_file_name(global::DEFAULTS_FILE),
    };

    let mut options = ConfigOptions::new(path, example);
    options.allow_empty_values = cli.allow_empty;
    options.safe = !cli.no_defaults;
    Ok(options)
}

pub fn run(cli: &Cli) -> Result<()> {
    let options = config_options(cli)?;
    debug!("Using config options: {:?}", options);

    let config = Config::load(&options)?;
    let platform = Platform::current()?;

    run_with(
        cli,
        &config,
        platform,
        &FuzzySelector::new(),
        &SystemRunner,
        &mut io::stdout(),
    )
}

/// Registry → selection → dispatch, with every outside effect injected.
pub fn run_with<S, R, W>(
    cli: &Cli,
    config: &Config,
    platform: Platform,
    selector: &S,
    runner: &R,
    out: &mut W,
) -> Result<()>
where
    S: MeetingSelector,
    R: ProcessRunner,
    W: Write,
{
    let registry = MeetingRegistry::from_config(config)?;

    if cli.list {
        return print_meetings(&registry, out);
    }
    if registry.is_empty() {
        return Err(MtgError::NoMeetings.into());
    }

    let name = match cli.meeting.as_deref() {
        Some(name) => name.to_lowercase(),
        None => selector.select(&registry.names())?,
    };
    let url = registry.resolve(&name)?;
    let dispatcher = Dispatcher::new(platform, config, runner)?;

    if cli.dry_run {
        let command = dispatcher.plan(&name, url)?;
        writeln!(out, "{command}")?;
        return Ok(());
    }

    dispatcher.dispatch(&name, url)?;
    Ok(())
}

fn print_meetings<W: Write>(registry: &MeetingRegistry, out: &mut W) -> Result<()> {
    let width = registry.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, url) in registry.iter() {
        writeln!(out, "{name:<width$}  {}", Provider::detect(url))?;
    }
    Ok(())
}
