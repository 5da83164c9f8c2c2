//! Interactive meeting picker.

use crate::error::{MtgError, MtgResult};
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use std::io::{self, IsTerminal};
use tracing::debug;

pub const PROMPT: &str = "Choose a meeting to join";

pub trait MeetingSelector {
    /// Block until the user picks one of `names`, or fail with
    /// [`MtgError::NoSelection`] when they cancel with Esc.
    fn select(&self, names: &[String]) -> MtgResult<String>;
}

/// Search-as-you-type picker on the terminal.
#[derive(Default)]
pub struct FuzzySelector {
    theme: ColorfulTheme,
}

impl FuzzySelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeetingSelector for FuzzySelector {
    fn select(&self, names: &[String]) -> MtgResult<String> {
        if !io::stdin().is_terminal() {
            return Err(MtgError::NoSelection {
                hint: Some("stdin is not a terminal; pass the meeting name as an argument".into()),
            });
        }

        let choice = FuzzySelect::with_theme(&self.theme)
            .with_prompt(PROMPT)
            .items(names)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(index) => {
                debug!("Selected meeting #{}", index);
                names
                    .get(index)
                    .cloned()
                    .ok_or(MtgError::NoSelection { hint: None })
            }
            None => Err(MtgError::NoSelection { hint: None }),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    /// Answers with a fixed choice, or cancels when `choice` is `None`.
    pub(crate) struct ScriptedSelector {
        pub choice: Option<&'static str>,
        pub calls: Cell<usize>,
    }

    impl ScriptedSelector {
        pub(crate) fn picking(choice: &'static str) -> Self {
            Self {
                choice: Some(choice),
                calls: Cell::new(0),
            }
        }

        pub(crate) fn cancelling() -> Self {
            Self {
                choice: None,
                calls: Cell::new(0),
            }
        }
    }

    impl MeetingSelector for ScriptedSelector {
        fn select(&self, names: &[String]) -> MtgResult<String> {
            self.calls.set(self.calls.get() + 1);
            match self.choice {
                Some(choice) => {
                    assert!(names.iter().any(|n| n == choice), "{choice} not offered");
                    Ok(choice.to_string())
                }
                None => Err(MtgError::NoSelection { hint: None }),
            }
        }
    }
}
