//! Swing contact resolution — the outcome probability table.

use diamond_core::constants::{
    CONTACT_CHANCE_IN_ZONE, CONTACT_CHANCE_OUT_OF_ZONE, FOUL_THRESHOLD, HOME_RUN_THRESHOLD,
    OUT_IN_PLAY_THRESHOLD,
};

/// What happened when the bat met the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    HomeRun,
    Foul,
    OutInPlay,
    /// Batter reached safely. Bases gained is rolled separately.
    Hit,
}

/// Chance of making contact on a swing at the given pitch.
pub fn contact_chance(in_zone: bool) -> f64 {
    if in_zone {
        CONTACT_CHANCE_IN_ZONE
    } else {
        CONTACT_CHANCE_OUT_OF_ZONE
    }
}

/// Classify a uniform `[0, 1)` contact roll into an outcome band.
pub fn classify_contact(hit_roll: f64) -> ContactKind {
    if hit_roll < HOME_RUN_THRESHOLD {
        ContactKind::HomeRun
    } else if hit_roll < FOUL_THRESHOLD {
        ContactKind::Foul
    } else if hit_roll < OUT_IN_PLAY_THRESHOLD {
        ContactKind::OutInPlay
    } else {
        ContactKind::Hit
    }
}
