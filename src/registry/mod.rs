//! Meeting registry built from `MEET_<name>` / `ZOOM_<name>` configuration keys.

use crate::config::Config;
use crate::error::{MtgError, MtgResult};
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

pub const MEETING_KEY_PATTERN: &str = r"^(MEET|ZOOM)_(.+)$";

/// Lowercased meeting name for a configuration key, if it is a meeting key.
fn meeting_name(pattern: &Regex, key: &str) -> Option<String> {
    pattern
        .captures(key)
        .and_then(|caps| caps.get(2))
        .map(|name| name.as_str().to_lowercase())
}

/// Immutable mapping from meeting name to URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingRegistry {
    meetings: BTreeMap<String, String>,
}

impl MeetingRegistry {
    /// Build the registry from every meeting key in `config`.
    ///
    /// Provider prefixes are not distinguished here. Two keys that lowercase
    /// to the same name are rejected rather than silently overwritten.
    pub fn from_config(config: &Config) -> MtgResult<Self> {
        let pattern = Regex::new(MEETING_KEY_PATTERN)?;
        let mut meetings = BTreeMap::new();
        let mut sources: BTreeMap<String, &str> = BTreeMap::new();

        for (key, url) in config.iter() {
            let Some(name) = meeting_name(&pattern, key) else {
                continue;
            };

            if let Some(previous) = sources.get(&name) {
                return Err(MtgError::DuplicateMeeting {
                    name,
                    keys: vec![previous.to_string(), key.to_string()],
                });
            }

            debug!("Registered meeting '{}' from {}", name, key);
            sources.insert(name.clone(), key);
            meetings.insert(name, url.to_string());
        }

        Ok(Self { meetings })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.meetings.get(name).map(String::as_str)
    }

    /// URL for `name`, failing with the sorted list of valid names.
    pub fn resolve(&self, name: &str) -> MtgResult<&str> {
        self.get(name)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| MtgError::UnresolvedMeeting {
                name: name.to_string(),
                valid: self.names(),
            })
    }

    /// Meeting names in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.meetings.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.meetings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}
