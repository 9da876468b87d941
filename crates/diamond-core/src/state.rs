//! Game state: the persistent scoreboard record and the per-tick
//! snapshot sent to the frontend.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, PitchOutcome, Team};
use crate::events::GameEvent;
use crate::types::{PitchLocation, SimTime};

/// The scoreboard record for one game.
///
/// Owned and mutated exclusively by the engine. Exposed wholesale in
/// every snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// Current inning, starting at 1. Stays in `1..=9`.
    pub inning: u32,
    /// True while the away team bats (top half of the inning).
    pub is_top: bool,
    /// Strikes on the current batter. Stored values stay in `0..=2`;
    /// the third strike resolves into an out instead of being stored.
    pub strikes: u8,
    /// Balls on the current batter. Stored values stay in `0..=3`.
    pub balls: u8,
    /// Outs in the current half-inning. Stored values stay in `0..=2`;
    /// the third out resolves into a side change instead.
    pub outs: u8,
    pub home_score: u32,
    pub away_score: u32,
    /// Base occupancy, indexed first, second, third.
    pub bases: [bool; 3],
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            inning: 1,
            is_top: true,
            strikes: 0,
            balls: 0,
            outs: 0,
            home_score: 0,
            away_score: 0,
            bases: [false; 3],
        }
    }
}

impl GameData {
    /// The team currently at bat.
    pub fn batting_team(&self) -> Team {
        if self.is_top {
            Team::Away
        } else {
            Team::Home
        }
    }

    /// Number of occupied bases.
    pub fn runners_on(&self) -> u8 {
        self.bases.iter().filter(|&&occupied| occupied).count() as u8
    }

    /// Credit runs to the team currently at bat.
    pub fn add_runs(&mut self, runs: u32) {
        match self.batting_team() {
            Team::Away => self.away_score += runs,
            Team::Home => self.home_score += runs,
        }
    }
}

/// Complete visible state produced by the engine each tick.
///
/// The frontend renders purely from the latest snapshot; it never
/// reaches into the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub data: GameData,
    /// Present from the moment a pitch is thrown until the result
    /// display clears.
    pub pitch: Option<PitchLocation>,
    /// Present only after a swing. Purely presentational.
    pub swing_timing: Option<f64>,
    /// Most recently resolved outcome, if any.
    pub last_result: Option<PitchOutcome>,
    pub game_over: bool,
    /// Cues that fired during this tick.
    pub events: Vec<GameEvent>,
}
