//! Meeting URL classification and the Zoom deep-link rewrite.

use crate::error::{MtgError, MtgResult};
use regex::Regex;
use std::fmt;

pub const GOOGLE_MEET_HOST: &str = "meet.google.com";
/// ASCII classes only; `\d` and `\w` are Unicode-aware in `regex`.
pub const ZOOM_URL_PATTERN: &str = r"zoom\.us/j/([0-9]+).+?pwd=([A-Za-z0-9_]+)";

/// Build the `zoommtg://` link that opens the Zoom app directly.
pub fn zoom_deep_link(conference_id: &str, password: &str) -> String {
    format!("zoommtg://zoom.us/join?action=join&confno={conference_id}&pwd={password}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    GoogleMeet,
    Zoom,
}

impl Provider {
    /// Provider implied by a URL. Anything that is not Google Meet is Zoom.
    pub fn detect(url: &str) -> Self {
        if url.contains(GOOGLE_MEET_HOST) {
            Provider::GoogleMeet
        } else {
            Provider::Zoom
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::GoogleMeet => "google-meet",
            Provider::Zoom => "zoom",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingLink {
    GoogleMeet { url: String },
    Zoom {
        conference_id: String,
        password: String,
    },
}

/// Parses meeting URLs into [`MeetingLink`]s.
pub struct LinkParser {
    zoom_regex: Regex,
}

impl LinkParser {
    pub fn new() -> MtgResult<Self> {
        Ok(Self {
            zoom_regex: Regex::new(ZOOM_URL_PATTERN)?,
        })
    }

    /// Classify `url`, saved under meeting `name`.
    ///
    /// Zoom URLs must carry a numeric conference id and a `pwd` parameter.
    pub fn parse(&self, name: &str, url: &str) -> MtgResult<MeetingLink> {
        match Provider::detect(url) {
            Provider::GoogleMeet => Ok(MeetingLink::GoogleMeet {
                url: url.to_string(),
            }),
            Provider::Zoom => {
                let caps = self
                    .zoom_regex
                    .captures(url)
                    .ok_or_else(|| MtgError::InvalidZoomUrl {
                        name: name.to_string(),
                    })?;
                Ok(MeetingLink::Zoom {
                    conference_id: caps[1].to_string(),
                    password: caps[2].to_string(),
                })
            }
        }
    }
}

impl MeetingLink {
    pub fn provider(&self) -> Provider {
        match self {
            MeetingLink::GoogleMeet { .. } => Provider::GoogleMeet,
            MeetingLink::Zoom { .. } => Provider::Zoom,
        }
    }

    /// The URI handed to the opener.
    pub fn target(&self) -> String {
        match self {
            MeetingLink::GoogleMeet { url } => url.clone(),
            MeetingLink::Zoom {
                conference_id,
                password,
            } => zoom_deep_link(conference_id, password),
        }
    }
}
