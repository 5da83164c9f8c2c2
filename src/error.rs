//! Error taxonomy for the launcher.
//!
//! Every failure is terminal for the run. `main` prints the message and exits
//! with [`MtgError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// sysexits(3) codes used for process exit.
pub mod exit_code {
    pub const FAILURE: i32 = 1;
    pub const DATA_ERR: i32 = 65;
    pub const UNAVAILABLE: i32 = 69;
    pub const CONFIG: i32 = 78;
    pub const CANCELLED: i32 = 130;
}

#[derive(Debug, Error)]
pub enum MtgError {
    #[error("Configuration file not found: {}", .path.display())]
    ConfigurationNotFound { path: PathBuf },

    #[error("Missing required configuration keys in {}: {}", .path.display(), .keys.join(", "))]
    MissingConfiguration { path: PathBuf, keys: Vec<String> },

    #[error("Configuration keys have empty values: {}", .keys.join(", "))]
    EmptyValue { keys: Vec<String> },

    #[error("{os} is not supported. Please use a Linux or Mac machine.")]
    UnsupportedPlatform { os: String },

    #[error("No meeting selected{}", .hint.as_deref().map(|h| format!(" ({h})")).unwrap_or_default())]
    NoSelection { hint: Option<String> },

    #[error("No MEET_* or ZOOM_* entries found in the configuration")]
    NoMeetings,

    #[error(
        "Couldn't find or parse the Zoom or Google Meet link for '{name}'. Here are the valid calls:\n{}",
        .valid.join(", ")
    )]
    UnresolvedMeeting { name: String, valid: Vec<String> },

    #[error("Meeting name '{name}' is defined by more than one key: {}", .keys.join(", "))]
    DuplicateMeeting { name: String, keys: Vec<String> },

    #[error(
        "The Zoom URL that we have saved for '{name}' is invalid. Please check the URL to make sure it is a valid Zoom URL and try again."
    )]
    InvalidZoomUrl { name: String },

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl MtgError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            MtgError::ConfigurationNotFound { .. }
            | MtgError::MissingConfiguration { .. }
            | MtgError::EmptyValue { .. }
            | MtgError::DuplicateMeeting { .. }
            | MtgError::NoMeetings => exit_code::CONFIG,
            MtgError::UnsupportedPlatform { .. } => exit_code::UNAVAILABLE,
            MtgError::NoSelection { .. } => exit_code::CANCELLED,
            MtgError::UnresolvedMeeting { .. } | MtgError::InvalidZoomUrl { .. } => {
                exit_code::DATA_ERR
            }
            MtgError::Regex(_) | MtgError::Prompt(_) | MtgError::Io { .. } => {
                exit_code::FAILURE
            }
        }
    }
}

pub type MtgResult<T> = Result<T, MtgError>;
