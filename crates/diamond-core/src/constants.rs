//! Rule constants and tuning parameters.

// ============================================================
// Simulation timing
// ============================================================

/// Simulation tick rate in Hz.
pub const TICK_RATE: u32 = 30;

/// Fixed timestep duration in seconds.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// ============================================================
// Strike zone
// ============================================================

/// Lower strike-zone bound on both axes, exclusive. A pitch landing
/// exactly on the boundary is a ball.
pub const ZONE_MIN: f64 = 20.0;

/// Upper strike-zone bound on both axes, exclusive.
pub const ZONE_MAX: f64 = 80.0;

/// Pitch coordinates are drawn uniformly from `[0, PITCH_GRID_MAX)`.
pub const PITCH_GRID_MAX: f64 = 100.0;

// ============================================================
// Counts and innings
// ============================================================

/// Strikes that retire the batter.
pub const STRIKES_PER_OUT: u8 = 3;

/// Balls that walk the batter.
pub const BALLS_PER_WALK: u8 = 4;

/// Outs that retire the side.
pub const OUTS_PER_SIDE: u8 = 3;

/// Regulation game length in innings.
pub const INNINGS_PER_GAME: u32 = 9;

/// A foul ball never raises the strike count past this value.
pub const FOUL_STRIKE_CAP: u8 = 2;

// ============================================================
// Swing resolution
// ============================================================

/// Chance of making contact when swinging at a pitch in the zone.
pub const CONTACT_CHANCE_IN_ZONE: f64 = 0.70;

/// Chance of making contact when chasing a pitch outside the zone.
pub const CONTACT_CHANCE_OUT_OF_ZONE: f64 = 0.30;

/// Contact rolls below this are home runs.
pub const HOME_RUN_THRESHOLD: f64 = 0.15;

/// Contact rolls in `[HOME_RUN_THRESHOLD, FOUL_THRESHOLD)` are fouls.
pub const FOUL_THRESHOLD: f64 = 0.35;

/// Contact rolls in `[FOUL_THRESHOLD, OUT_IN_PLAY_THRESHOLD)` are outs
/// in play. Anything above is a base hit.
pub const OUT_IN_PLAY_THRESHOLD: f64 = 0.55;

/// Chance a base hit is a single.
pub const SINGLE_CHANCE: f64 = 0.60;

/// Chance a non-single hit is a double rather than a triple.
pub const DOUBLE_CHANCE_GIVEN_EXTRA: f64 = 0.70;

// ============================================================
// Presentation delays (in ticks at TICK_RATE)
// ============================================================

/// Pitch flight time from release to the plate (800 ms).
pub const PITCH_FLIGHT_TICKS: u64 = 24;

/// Delay between an at-bat-ending result and the out being recorded
/// on the scoreboard (1000 ms).
pub const AT_BAT_END_DELAY_TICKS: u64 = 30;

/// How long a swing result stays on display before the next pitch can
/// be thrown (1500 ms).
pub const SWING_RESULT_TICKS: u64 = 45;

/// How long a taken-pitch result stays on display (1200 ms).
pub const TAKE_RESULT_TICKS: u64 = 36;
