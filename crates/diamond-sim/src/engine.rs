//! Game engine — the core of the game.
//!
//! `GameEngine` owns the scoreboard record and all transient at-bat
//! state, processes player commands, applies due continuations, and
//! produces `GameSnapshot`s. Completely headless (no UI dependency),
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use diamond_core::commands::PlayerCommand;
use diamond_core::constants::{
    AT_BAT_END_DELAY_TICKS, BALLS_PER_WALK, DOUBLE_CHANCE_GIVEN_EXTRA, FOUL_STRIKE_CAP,
    INNINGS_PER_GAME, OUTS_PER_SIDE, PITCH_FLIGHT_TICKS, PITCH_GRID_MAX, SINGLE_CHANCE,
    STRIKES_PER_OUT, SWING_RESULT_TICKS, TAKE_RESULT_TICKS,
};
use diamond_core::enums::{GamePhase, PitchOutcome};
use diamond_core::events::GameEvent;
use diamond_core::state::{GameData, GameSnapshot};
use diamond_core::types::{PitchLocation, SimTime};

use crate::baserunning::advance_runners;
use crate::resolution::{classify_contact, contact_chance, ContactKind};

/// Configuration for starting a new game.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same command schedule =
    /// same game.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game engine. Owns the scoreboard and all at-bat state.
pub struct GameEngine {
    data: GameData,
    phase: GamePhase,
    pitch: Option<PitchLocation>,
    swing_timing: Option<f64>,
    last_result: Option<PitchOutcome>,
    game_over: bool,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,

    // --- Pending continuations, as due ticks ---
    /// Pitching -> Batting when the ball reaches the plate.
    pitch_delivery_due: Option<u64>,
    /// Record the out from a strikeout or a ball in play.
    at_bat_end_due: Option<u64>,
    /// Result -> Waiting when the result display has run its course.
    return_to_waiting_due: Option<u64>,
}

impl GameEngine {
    /// Create a new game engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            data: GameData::default(),
            phase: GamePhase::default(),
            pitch: None,
            swing_timing: None,
            last_result: None,
            game_over: false,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            pitch_delivery_due: None,
            at_bat_end_due: None,
            return_to_waiting_due: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();
        self.run_continuations();
        self.time.advance();

        GameSnapshot {
            time: self.time,
            phase: self.phase,
            data: self.data,
            pitch: self.pitch,
            swing_timing: self.swing_timing,
            last_result: self.last_result,
            game_over: self.game_over,
            events: std::mem::take(&mut self.events),
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the scoreboard record.
    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// Whether the game has reached its final out.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Put the engine at the plate with a pitch at the given location
    /// (for tests needing a known zone call).
    #[cfg(test)]
    pub fn force_batting(&mut self, x: f64, y: f64) {
        self.phase = GamePhase::Batting;
        self.pitch = Some(PitchLocation::new(x, y));
        self.swing_timing = None;
        self.last_result = None;
        self.pitch_delivery_due = None;
    }

    /// Get mutable access to the scoreboard record (for tests seeding
    /// runners or counts).
    #[cfg(test)]
    pub fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }

    /// Resolve a swing as if the contact dice had come up with the
    /// given outcome (for tests needing a specific result).
    #[cfg(test)]
    pub fn force_swing_contact(&mut self, kind: ContactKind, bases_reached: u8) {
        self.phase = GamePhase::Result;
        match kind {
            ContactKind::HomeRun => self.apply_home_run(),
            ContactKind::Foul => self.apply_foul(),
            ContactKind::OutInPlay => self.apply_out_in_play(),
            ContactKind::Hit => self.apply_base_hit(bases_reached),
        }
        self.return_to_waiting_due = Some(self.time.tick + SWING_RESULT_TICKS);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. A command whose precondition
    /// does not hold is ignored without mutating anything.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pitch => self.throw_pitch(),
            PlayerCommand::Swing => self.swing(),
            PlayerCommand::Take => self.take(),
            PlayerCommand::Reset => self.reset_game(),
        }
    }

    /// Apply any continuations that have come due this tick.
    ///
    /// Phase moves re-check the phase they leave from, so a reset that
    /// already cleared the slot (or moved the phase) never gets a stale
    /// transition applied on top.
    fn run_continuations(&mut self) {
        if self.due(self.at_bat_end_due) {
            self.at_bat_end_due = None;
            self.end_at_bat();
        }
        if self.due(self.pitch_delivery_due) {
            self.pitch_delivery_due = None;
            if self.phase == GamePhase::Pitching {
                self.phase = GamePhase::Batting;
            }
        }
        if self.due(self.return_to_waiting_due) {
            self.return_to_waiting_due = None;
            if self.phase == GamePhase::Result {
                self.phase = GamePhase::Waiting;
                self.pitch = None;
                self.swing_timing = None;
            }
        }
    }

    fn due(&self, slot: Option<u64>) -> bool {
        slot.is_some_and(|due_tick| self.time.tick >= due_tick)
    }

    /// `Pitch`: throw the next pitch. Waiting only, never after the
    /// final out.
    fn throw_pitch(&mut self) {
        if self.phase != GamePhase::Waiting || self.game_over {
            return;
        }

        let x = self.rng.gen_range(0.0..PITCH_GRID_MAX);
        let y = self.rng.gen_range(0.0..PITCH_GRID_MAX);
        self.pitch = Some(PitchLocation::new(x, y));
        self.last_result = None;
        self.phase = GamePhase::Pitching;
        self.pitch_delivery_due = Some(self.time.tick + PITCH_FLIGHT_TICKS);
        self.events.push(GameEvent::PitchThrown);
    }

    /// `Swing`: swing at the pitch. Batting only.
    ///
    /// Timing is rolled before contact so the frontend always has a
    /// swing animation value, whatever the outcome.
    fn swing(&mut self) {
        if self.phase != GamePhase::Batting {
            return;
        }
        let pitch = match self.pitch {
            Some(p) => p,
            None => return,
        };

        self.swing_timing = Some(self.rng.gen());
        self.phase = GamePhase::Result;

        if self.rng.gen_bool(contact_chance(pitch.in_zone())) {
            match classify_contact(self.rng.gen()) {
                ContactKind::HomeRun => self.apply_home_run(),
                ContactKind::Foul => self.apply_foul(),
                ContactKind::OutInPlay => self.apply_out_in_play(),
                ContactKind::Hit => {
                    let bases_reached = self.roll_hit_bases();
                    self.apply_base_hit(bases_reached);
                }
            }
        } else {
            self.record_strike();
        }

        self.return_to_waiting_due = Some(self.time.tick + SWING_RESULT_TICKS);
    }

    /// `Take`: let the pitch go by. Batting only. The zone decides the
    /// call.
    fn take(&mut self) {
        if self.phase != GamePhase::Batting {
            return;
        }
        let pitch = match self.pitch {
            Some(p) => p,
            None => return,
        };

        self.phase = GamePhase::Result;

        if pitch.in_zone() {
            self.record_strike();
        } else {
            self.record_ball();
        }

        self.return_to_waiting_due = Some(self.time.tick + TAKE_RESULT_TICKS);
    }

    /// `Reset`: abandon the current game and start fresh. Valid from
    /// any state. Pending continuations are cancelled; the RNG stream
    /// continues where it left off.
    fn reset_game(&mut self) {
        self.data = GameData::default();
        self.phase = GamePhase::Waiting;
        self.pitch = None;
        self.swing_timing = None;
        self.last_result = None;
        self.game_over = false;
        self.time = SimTime::default();
        self.pitch_delivery_due = None;
        self.at_bat_end_due = None;
        self.return_to_waiting_due = None;
    }

    /// Shared strike accumulation for a whiff or a called strike. The
    /// third strike zeroes the count immediately; the out itself lands
    /// after the display delay.
    fn record_strike(&mut self) {
        self.last_result = Some(PitchOutcome::Strike);

        let strikes = self.data.strikes + 1;
        if strikes >= STRIKES_PER_OUT {
            self.data.strikes = 0;
            self.events.push(GameEvent::Strikeout);
            self.at_bat_end_due = Some(self.time.tick + AT_BAT_END_DELAY_TICKS);
        } else {
            self.data.strikes = strikes;
        }
    }

    /// Called ball. The fourth walks the batter via the same advance
    /// arithmetic as a one-base hit.
    fn record_ball(&mut self) {
        self.last_result = Some(PitchOutcome::Ball);

        let balls = self.data.balls + 1;
        if balls >= BALLS_PER_WALK {
            self.data.balls = 0;
            self.data.strikes = 0;
            let (bases, runs) = advance_runners(self.data.bases, 1);
            self.data.bases = bases;
            self.data.add_runs(runs);
            self.events.push(GameEvent::Walk { runs_forced: runs });
        } else {
            self.data.balls = balls;
        }
    }

    /// Home run: batter plus every runner scores, bases clear, fresh
    /// count.
    fn apply_home_run(&mut self) {
        self.last_result = Some(PitchOutcome::HomeRun);

        let runs = 1 + self.data.runners_on() as u32;
        self.data.add_runs(runs);
        self.data.bases = [false; 3];
        self.data.strikes = 0;
        self.data.balls = 0;
        self.events.push(GameEvent::HomeRun { runs });
    }

    /// Foul ball: a strike, but never the third.
    fn apply_foul(&mut self) {
        self.last_result = Some(PitchOutcome::Foul);
        self.data.strikes = (self.data.strikes + 1).min(FOUL_STRIKE_CAP);
    }

    /// Ball in play for an out. The count stays on the board until the
    /// out is recorded after the display delay.
    fn apply_out_in_play(&mut self) {
        self.last_result = Some(PitchOutcome::Out);
        self.events.push(GameEvent::OutInPlay);
        self.at_bat_end_due = Some(self.time.tick + AT_BAT_END_DELAY_TICKS);
    }

    /// Base hit: advance all runners by the bases reached, fresh count.
    fn apply_base_hit(&mut self, bases_reached: u8) {
        self.last_result = Some(PitchOutcome::Hit);

        let (bases, runs) = advance_runners(self.data.bases, bases_reached);
        self.data.bases = bases;
        self.data.add_runs(runs);
        self.data.strikes = 0;
        self.data.balls = 0;
        self.events.push(GameEvent::BaseHit {
            bases: bases_reached,
            runs,
        });
    }

    /// How many bases the batter reaches on a hit.
    fn roll_hit_bases(&mut self) -> u8 {
        if self.rng.gen_bool(SINGLE_CHANCE) {
            1
        } else if self.rng.gen_bool(DOUBLE_CHANCE_GIVEN_EXTRA) {
            2
        } else {
            3
        }
    }

    /// Record the out that ends the current at-bat, changing sides and
    /// innings as needed.
    fn end_at_bat(&mut self) {
        let outs = self.data.outs + 1;
        if outs < OUTS_PER_SIDE {
            self.data.outs = outs;
            self.data.strikes = 0;
            self.data.balls = 0;
            return;
        }

        // Third out: the half-inning books close either way. On the
        // final out of the ninth the inning and side stay put and the
        // game freezes.
        let next_is_top = !self.data.is_top;
        let next_inning = if next_is_top {
            self.data.inning + 1
        } else {
            self.data.inning
        };

        self.data.outs = 0;
        self.data.strikes = 0;
        self.data.balls = 0;
        self.data.bases = [false; 3];

        if next_inning > INNINGS_PER_GAME {
            self.game_over = true;
            self.events.push(GameEvent::GameOver {
                home_score: self.data.home_score,
                away_score: self.data.away_score,
            });
            return;
        }

        self.data.is_top = next_is_top;
        self.data.inning = next_inning;
        self.events.push(GameEvent::SideRetired {
            inning: next_inning,
            is_top: next_is_top,
        });
    }
}
