//! Core types and definitions for Diamond Classic.
//!
//! This crate defines the shared vocabulary used by the engine and the
//! application layer: player commands, phases, the scoreboard record,
//! snapshots, frontend events, and rule constants. It depends on no
//! runtime framework so the engine stays fully headless.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
