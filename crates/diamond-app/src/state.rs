//! Application state shared between the host API and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use diamond_core::commands::PlayerCommand;
use diamond_core::state::GameSnapshot;

/// Commands sent from the host API to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the game engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// The host API may be called from any frontend thread, so everything
/// here is Send + Sync:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before `start_game`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_game` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
