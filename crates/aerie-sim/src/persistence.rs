//! Persistence boundary. The core only converts between the player and a
//! `SaveState`; reading and writing files is the caller's job.

use aerie_core::components::PlayerState;
use aerie_core::error::SimError;
use aerie_core::state::SaveState;

pub fn export_state(player: &PlayerState) -> SaveState {
    SaveState {
        position: player.position,
    }
}

/// Restore the player from `state`. On error the player is left untouched.
pub fn import_state(player: &mut PlayerState, state: &SaveState) -> Result<(), SimError> {
    state.validate()?;
    player.place(state.position);
    Ok(())
}
