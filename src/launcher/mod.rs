//! External process launching behind the [`ProcessRunner`] seam.

use crate::error::{MtgError, MtgResult};
use std::fmt;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;
use which::which;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
}

impl Platform {
    pub fn current() -> MtgResult<Self> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> MtgResult<Self> {
        match os {
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(MtgError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Command that opens a URL in its default handler.
    pub fn default_opener(&self) -> &'static str {
        match self {
            Platform::MacOs => "open",
            Platform::Linux => "xdg-open",
        }
    }
}

/// A single external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub trait ProcessRunner {
    /// Whether `program` resolves to an executable on the search path.
    fn is_executable(&self, program: &str) -> bool;

    /// Run `command` to completion with its output suppressed.
    fn run(&self, command: &LaunchCommand) -> MtgResult<ExitStatus>;
}

/// Runs real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn is_executable(&self, program: &str) -> bool {
        match which(program) {
            Ok(path) => {
                debug!("Resolved {} to {:?}", program, path);
                true
            }
            Err(err) => {
                debug!("{} is not executable: {}", program, err);
                false
            }
        }
    }

    fn run(&self, command: &LaunchCommand) -> MtgResult<ExitStatus> {
        debug!("Spawning: {}", command);
        Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| MtgError::io(format!("Failed to execute {}", command.program), e))
    }
}
