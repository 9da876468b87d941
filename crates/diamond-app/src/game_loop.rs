//! Game loop thread — runs the engine at 30Hz and streams snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are sent
//! out on a channel for the frontend to drain and stored in shared
//! state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use diamond_core::constants::TICK_RATE;
use diamond_core::state::GameSnapshot;
use diamond_sim::engine::{EngineConfig, GameEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop on its own thread.
///
/// Returns the command sender for the host API to use.
pub fn spawn_game_loop(
    config: EngineConfig,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("diamond-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, snapshot_tx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: EngineConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Forward every pending command to the engine
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Stream the snapshot to the frontend; a dropped receiver
        //    means the frontend is gone and the loop can stop
        if snapshot_tx.send(snapshot.clone()).is_err() {
            return;
        }

        // 4. Keep the latest snapshot available for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // More than two ticks behind: rebase rather than spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diamond_core::commands::PlayerCommand;
    use diamond_core::enums::GamePhase;
    use std::time::Duration;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pitch))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Swing))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pitch)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Swing)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(EngineConfig::default());
        engine.queue_command(PlayerCommand::Pitch);

        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    /// Spawn the real loop thread, watch a pitch go through it, then
    /// shut it down.
    #[test]
    fn test_loop_thread_streams_snapshots() {
        let (snapshot_tx, snapshot_rx) = mpsc::channel();
        let latest = Arc::new(Mutex::new(None));
        let cmd_tx = spawn_game_loop(EngineConfig::default(), snapshot_tx, latest.clone());

        let first = snapshot_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("Loop should stream a snapshot within the timeout");
        assert_eq!(first.phase, GamePhase::Waiting);
        assert!(first.time.tick >= 1);

        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::Pitch))
            .unwrap();

        let mut saw_pitching = false;
        for _ in 0..100 {
            let snap = snapshot_rx
                .recv_timeout(Duration::from_secs(1))
                .expect("Loop should keep streaming");
            if snap.phase == GamePhase::Pitching {
                saw_pitching = true;
                break;
            }
        }
        assert!(saw_pitching, "Queued Pitch should reach the engine");
        assert!(
            latest.lock().unwrap().is_some(),
            "Latest snapshot slot should be populated"
        );

        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        let mut disconnected = false;
        for _ in 0..1000 {
            match snapshot_rx.recv_timeout(Duration::from_secs(1)) {
                Ok(_) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    disconnected = true;
                    break;
                }
                Err(mpsc::RecvTimeoutError::Timeout) => break,
            }
        }
        assert!(disconnected, "Loop thread should exit after Shutdown");
    }
}
