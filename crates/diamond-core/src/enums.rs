//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Top-level engine phase. Gates which player commands are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Between pitches. `Pitch` is the only accepted play command.
    #[default]
    Waiting,
    /// Ball in flight toward the plate. No commands are accepted.
    Pitching,
    /// Ball at the plate. The batter must `Swing` or `Take`.
    Batting,
    /// Outcome on display. Returns to `Waiting` after a fixed delay.
    Result,
}

/// Resolved outcome of a single pitch, shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchOutcome {
    /// Swing and miss, or a taken pitch in the zone.
    Strike,
    /// Taken pitch outside the zone.
    Ball,
    /// Ball in play, batter reached safely.
    Hit,
    /// Contact out of play. Capped at two strikes.
    Foul,
    /// Over the fence. Everybody scores.
    HomeRun,
    /// Ball in play, batter retired.
    Out,
}

/// The two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    /// Visiting team. Bats in the top half of each inning.
    Away,
    /// Home team. Bats in the bottom half of each inning.
    Home,
}
