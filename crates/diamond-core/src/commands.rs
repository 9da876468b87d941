//! Player commands sent from the frontend to the game engine.
//!
//! Commands are queued and processed at the next tick boundary. A
//! command whose precondition does not hold (wrong phase, game over)
//! is ignored without mutating any state.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Throw the next pitch. Accepted while waiting, unless the game
    /// is over.
    Pitch,
    /// Swing at the incoming pitch. Accepted while batting.
    Swing,
    /// Let the incoming pitch go by for a called strike or ball.
    /// Accepted while batting.
    Take,
    /// Abandon the current game and start fresh. Accepted in any
    /// state.
    Reset,
}
