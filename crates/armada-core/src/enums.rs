//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Ship lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Active and steerable, moving under its own acceleration.
    #[default]
    Alive,
    /// Breaking apart: hull fragments drift outward while opacity fades.
    Dying,
    /// Fully faded. Never drawn, never integrated, never steered.
    Idle,
}
