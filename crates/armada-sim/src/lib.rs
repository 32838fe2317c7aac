//! Fleet simulation engine for armada.
//!
//! Owns the ship population, runs steering decisions at a fixed rate
//! decoupled from the frame rate, and produces wireframe draw calls.
//! Completely headless, deterministic for a given seed.

pub mod engine;
pub mod ship;
pub mod spawn;
pub mod systems;

pub use armada_core as core;
pub use engine::FleetEngine;
