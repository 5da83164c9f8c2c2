use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "mtg", version)]
#[command(
    about = "Launch the desired meeting in the appropriate video call application or web browser",
    long_about = None
)]
pub struct Cli {
    /// Meeting to join, skipping the interactive prompt
    pub meeting: Option<String>,

    /// Path to the configuration file (default: $MTG_HOME/.env or ~/mtg/.env)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Path to the required-keys template (default: .env.defaults next to the config)
    #[arg(long, value_name = "PATH")]
    pub defaults_file: Option<PathBuf>,

    /// Accept configuration entries with empty values
    #[arg(long)]
    pub allow_empty: bool,

    /// Skip validation against the required-keys template
    #[arg(long)]
    pub no_defaults: bool,

    /// List configured meetings and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print the launch command instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
