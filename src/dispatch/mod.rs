//! Turns a selected meeting into a launched process.
//!
//! Google Meet links go to `LAUNCH_VIDEO_CMD` when it resolves to an
//! executable, otherwise to the platform opener. Zoom links are rewritten to
//! `zoommtg://` and always go to the platform opener.

use crate::config::{Config, LAUNCH_VIDEO_CMD};
use crate::error::MtgResult;
use crate::launcher::{LaunchCommand, Platform, ProcessRunner};
use crate::link::{LinkParser, MeetingLink};
use tracing::{info, warn};

pub struct Dispatcher<'a, R: ProcessRunner> {
    platform: Platform,
    launch_video_cmd: Option<&'a str>,
    parser: LinkParser,
    runner: &'a R,
}

impl<'a, R: ProcessRunner> Dispatcher<'a, R> {
    pub fn new(platform: Platform, config: &'a Config, runner: &'a R) -> MtgResult<Self> {
        Ok(Self {
            platform,
            launch_video_cmd: config.launch_video_cmd(),
            parser: LinkParser::new()?,
            runner,
        })
    }

    /// Build the command that would open meeting `name` at `url`.
    pub fn plan(&self, name: &str, url: &str) -> MtgResult<LaunchCommand> {
        let link = self.parser.parse(name, url)?;
        let program = match &link {
            MeetingLink::GoogleMeet { .. } => self.meet_program(),
            MeetingLink::Zoom { .. } => self.platform.default_opener(),
        };
        Ok(LaunchCommand::new(program).arg(link.target()))
    }

    /// Plan and run the command for meeting `name`.
    pub fn dispatch(&self, name: &str, url: &str) -> MtgResult<LaunchCommand> {
        let command = self.plan(name, url)?;
        info!("Launching '{}' with {}", name, command.program);

        let status = self.runner.run(&command)?;
        if !status.success() {
            warn!("{} exited with status {}", command.program, status);
        }
        Ok(command)
    }

    fn meet_program(&self) -> &str {
        match self.launch_video_cmd {
            Some(cmd) if self.runner.is_executable(cmd) => cmd,
            Some(cmd) => {
                warn!(
                    "{}='{}' is not executable, falling back to {}",
                    LAUNCH_VIDEO_CMD,
                    cmd,
                    self.platform.default_opener()
                );
                self.platform.default_opener()
            }
            None => self.platform.default_opener(),
        }
    }
}
