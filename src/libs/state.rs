//! Persistent clock flags: clocked in, on a break.
//!
//! The flags are read once per command and handed to the workflow by
//! reference. They must agree with the log: `clocked_in` is true exactly when
//! the last `IN` has not been followed by an `OUT`.

use super::data_storage::DataStorage;
use crate::libs::event::Action;
use crate::libs::messages::Message;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const STATE_FILE_NAME: &str = "state.json";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockState {
    pub clocked_in: bool,
    pub on_break: bool,
}

impl ClockState {
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        if !path.exists() {
            return Ok(ClockState::default());
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        serde_json::to_writer_pretty(File::create(path)?, self)?;
        Ok(())
    }

    /// Checks that `action` is allowed from the current flags and updates them.
    ///
    /// On refusal the flags are left as they were and the returned message
    /// says why; the caller must not append a row in that case.
    pub fn apply(&mut self, action: Action) -> Result<(), Message> {
        match action {
            Action::In if self.clocked_in => return Err(Message::AlreadyClockedIn),
            Action::In => {
                self.clocked_in = true;
                self.on_break = false;
            }
            Action::BreakOut if !self.clocked_in => return Err(Message::NotClockedIn),
            Action::BreakOut if self.on_break => return Err(Message::AlreadyOnBreak),
            Action::BreakOut => self.on_break = true,
            Action::BreakIn if !self.on_break => return Err(Message::NotOnBreak),
            Action::BreakIn => self.on_break = false,
            Action::Out if !self.clocked_in => return Err(Message::NotClockedIn),
            Action::Out => *self = ClockState::default(),
            Action::Reported => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_day_sequence() {
        let mut state = ClockState::default();
        for action in [Action::In, Action::BreakOut, Action::BreakIn, Action::Out] {
            state.apply(action).unwrap();
        }
        assert_eq!(state, ClockState::default());
    }

    #[test]
    fn test_refusals_leave_flags_untouched() {
        let mut state = ClockState::default();
        assert!(matches!(state.apply(Action::Out), Err(Message::NotClockedIn)));
        assert!(matches!(state.apply(Action::BreakOut), Err(Message::NotClockedIn)));
        assert!(matches!(state.apply(Action::BreakIn), Err(Message::NotOnBreak)));
        assert_eq!(state, ClockState::default());

        state.apply(Action::In).unwrap();
        assert!(matches!(state.apply(Action::In), Err(Message::AlreadyClockedIn)));
        state.apply(Action::BreakOut).unwrap();
        assert!(matches!(state.apply(Action::BreakOut), Err(Message::AlreadyOnBreak)));
        assert_eq!(state, ClockState { clocked_in: true, on_break: true });
    }

    #[test]
    fn test_out_during_break_clears_both_flags() {
        let mut state = ClockState { clocked_in: true, on_break: true };
        state.apply(Action::Out).unwrap();
        assert_eq!(state, ClockState::default());
    }
}
