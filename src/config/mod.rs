//! Loading of the flat `KEY=value` configuration file.
//!
//! The main file is validated against a template (`.env.defaults`) that lists
//! the keys every configuration must define.

use crate::error::{MtgError, MtgResult};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Control key naming an executable preferred for Google Meet links.
pub const LAUNCH_VIDEO_CMD: &str = "LAUNCH_VIDEO_CMD";

#[derive(Debug, Clone)]
pub struct ConfigOptions {
    /// The actual configuration file.
    pub path: PathBuf,
    /// Template listing required keys.
    pub example: PathBuf,
    /// Reject entries with empty values unless set.
    pub allow_empty_values: bool,
    /// Validate `path` against `example`.
    pub safe: bool,
}

impl ConfigOptions {
    pub fn new(path: impl Into<PathBuf>, example: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            example: example.into(),
            allow_empty_values: false,
            safe: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    entries: BTreeMap<String, String>,
}

impl Config {
    pub fn load(options: &ConfigOptions) -> MtgResult<Self> {
        let config = Self::read_file(&options.path)?;

        if options.safe && !options.example.exists() {
            // No template means no required keys.
            debug!("No template at {:?}", options.example);
        } else if options.safe {
            let template = Self::read_file(&options.example)?;
            let missing: Vec<String> = template
                .missing_from(&config)
                .into_iter()
                .map(String::from)
                .collect();
            if !missing.is_empty() {
                return Err(MtgError::MissingConfiguration {
                    path: options.path.clone(),
                    keys: missing,
                });
            }
        }

        if !options.allow_empty_values {
            let empty: Vec<String> = config
                .iter()
                .filter(|(_, value)| value.is_empty())
                .map(|(key, _)| key.to_string())
                .collect();
            if !empty.is_empty() {
                return Err(MtgError::EmptyValue { keys: empty });
            }
        }

        info!(
            "Loaded {} configuration entries from {:?}",
            config.len(),
            options.path
        );
        Ok(config)
    }

    fn read_file(path: &Path) -> MtgResult<Self> {
        if !path.exists() {
            return Err(MtgError::ConfigurationNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| MtgError::io(format!("Failed to read {}", path.display()), e))?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);

            let Some((key, value)) = line.split_once('=') else {
                debug!("Skipping line {} without '=': {}", index + 1, raw);
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                debug!("Skipping line {} with empty key", index + 1);
                continue;
            }

            entries.insert(key.to_string(), parse_value(value.trim()));
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `LAUNCH_VIDEO_CMD` override, ignoring blank values.
    pub fn launch_video_cmd(&self) -> Option<&str> {
        self.get(LAUNCH_VIDEO_CMD)
            .map(str::trim)
            .filter(|cmd| !cmd.is_empty())
    }

    /// Keys present in `self` but absent from `other`.
    pub fn missing_from(&self, other: &Config) -> BTreeSet<&str> {
        self.entries
            .keys()
            .filter(|key| !other.entries.contains_key(*key))
            .map(String::as_str)
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn parse_value(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            return if quote == '"' {
                inner.replace("\\n", "\n")
            } else {
                inner.to_string()
            };
        }
    }

    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}
