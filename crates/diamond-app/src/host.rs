//! Host-facing API.
//!
//! Thin synchronous functions a frontend binding layer calls to drive
//! the game. They bridge frontend requests to the game loop thread via
//! channels.

use std::sync::mpsc;

use diamond_core::commands::PlayerCommand;
use diamond_core::state::GameSnapshot;
use diamond_sim::engine::EngineConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the game. Spawns the game loop thread if not already running.
///
/// Returns the receiving end of the snapshot stream for the frontend
/// to drain.
pub fn start_game(
    state: &AppState,
    config: EngineConfig,
) -> Result<mpsc::Receiver<GameSnapshot>, String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Game already running".into());
    }

    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let cmd_tx = game_loop::spawn_game_loop(config, snapshot_tx, state.latest_snapshot.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(snapshot_rx)
}

/// Send a player command to the game.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Game not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop thread.
pub fn stop_game(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if !*running {
        return Err("Game not running".into());
    }

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    if let Some(tx) = tx_lock.take() {
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;

    Ok(())
}
