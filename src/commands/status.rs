use crate::{
    db::events::Events,
    libs::{checkpoint::last_checkpoint, config::Config, messages::Message, state::ClockState},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let state = ClockState::read()?;
    msg_print!(match (state.clocked_in, state.on_break) {
        (false, _) => Message::StatusClockedOut,
        (true, false) => Message::StatusWorking,
        (true, true) => Message::StatusOnBreak,
    });

    let events = Events::new()?.fetch_all()?;
    if events.is_empty() {
        msg_info!(Message::NoLogData);
        return Ok(());
    }

    let zone = Config::read()?.zone()?;
    msg_print!(Message::LastCheckpoint(zone.date_time(last_checkpoint(&events))));

    Ok(())
}
