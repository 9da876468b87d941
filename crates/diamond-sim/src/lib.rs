//! Game engine for Diamond Classic.
//!
//! Owns all mutable game state, processes player commands at a fixed
//! tick rate, and produces GameSnapshots for the frontend.

pub mod baserunning;
pub mod engine;
pub mod resolution;

pub use diamond_core as core;
pub use engine::GameEngine;
