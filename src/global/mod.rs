use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "mtg";
const HOME_ENV: &str = "MTG_HOME";

pub const ENV_FILE: &str = ".env";
pub const DEFAULTS_FILE: &str = ".env.defaults";

/// Directory holding `.env` and `.env.defaults`: `$MTG_HOME`, else `~/mtg`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(APP_DIR))
        .context("Unable to determine home directory")
}

pub fn env_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(ENV_FILE))
}
