use crate::{
    db::events::Events,
    libs::{config::Config, event::Action, messages::Message, state::ClockState},
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{DateTime, Utc};

pub fn cmd(action: Action) -> Result<()> {
    // A bad config must fail before anything is written.
    let zone = Config::read()?.zone()?;
    let now = Utc::now();
    if !record(action, now)? {
        return Ok(());
    }

    let time = zone.clock_time(now);
    let message = match action {
        Action::In => Message::ClockedIn(time),
        Action::Out => Message::ClockedOut(time),
        Action::BreakOut => Message::BreakStarted(time),
        Action::BreakIn => Message::BreakEnded(time),
        Action::Reported => Message::CheckpointRecorded(time),
    };
    msg_success!(message);

    Ok(())
}

/// Applies `action` to the stored clock flags and appends its row.
///
/// Returns `false` without touching the log or the flags when the current
/// state refuses the action; the reason is printed as a warning. If the row
/// cannot be appended the flags are restored before the error is returned.
pub fn record(action: Action, at: DateTime<Utc>) -> Result<bool> {
    let previous = ClockState::read()?;
    let mut state = previous;
    if let Err(refusal) = state.apply(action) {
        msg_warning!(refusal);
        return Ok(false);
    }

    // Flags first; a failed append puts them back.
    state.save()?;
    if let Err(e) = Events::new().and_then(|events| events.append(at.into(), action.token(), "")) {
        previous.save()?;
        return Err(e);
    }

    Ok(true)
}
