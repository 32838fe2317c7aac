//! Fleet commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible fleet actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FleetCommand {
    /// Begin the death animation for every ship.
    KillAll,
    /// Begin the death animation for the ship at a population index.
    /// Out-of-range indices are ignored.
    Kill { index: usize },
}
