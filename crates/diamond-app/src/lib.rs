//! Diamond Classic host layer.
//!
//! This crate wires the engine to a frontend: the game loop thread
//! owns the engine and runs it at a fixed rate, commands arrive over a
//! channel, and snapshots stream back out for rendering.

pub mod game_loop;
pub mod host;
pub mod state;

pub use diamond_core as core;
