//! Events emitted by the engine for frontend sound and animation cues.

use serde::{Deserialize, Serialize};

/// Discrete cues the frontend reacts to, drained into each snapshot.
///
/// An event marks the tick a rule outcome was decided, which is not
/// always the tick the scoreboard changes: the out from a strikeout or
/// a ball in play lands on the board only after a short display delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A pitch has left the mound.
    PitchThrown,
    /// Third strike. The out is recorded shortly after.
    Strikeout,
    /// Fourth ball. The batter walks, pushing every runner one base.
    Walk { runs_forced: u32 },
    /// Over the fence. `runs` counts the batter plus every runner.
    HomeRun { runs: u32 },
    /// Ball in play and the batter reached safely.
    BaseHit { bases: u8, runs: u32 },
    /// Ball in play for an out. Recorded shortly after.
    OutInPlay,
    /// Third out of the half-inning. Carries the half now starting.
    SideRetired { inning: u32, is_top: bool },
    /// Final out of the ninth inning.
    GameOver { home_score: u32, away_score: u32 },
}
