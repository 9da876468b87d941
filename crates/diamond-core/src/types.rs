//! Fundamental types shared across the game.

use serde::{Deserialize, Serialize};

use crate::constants::{DT, ZONE_MAX, ZONE_MIN};

/// Where a pitch crosses the plate, on the normalized 2D grid the
/// frontend draws. Both axes run `[0, 100)` with the strike zone in
/// the middle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchLocation {
    pub x: f64,
    pub y: f64,
}

impl PitchLocation {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether the pitch would be a called strike if taken.
    ///
    /// The zone is open on both axes. A pitch landing exactly on the
    /// boundary is a ball.
    pub fn in_zone(&self) -> bool {
        self.x > ZONE_MIN && self.x < ZONE_MAX && self.y > ZONE_MIN && self.y < ZONE_MAX
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Total elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Duration of one tick in seconds.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance time by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
