//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time, counted in steering decisions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Steering decisions issued so far.
    pub tick: u64,
    /// Elapsed decision time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per decision at the fixed decision rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DECISION_PERIOD
    }

    /// Advance by one decision.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Wrap a heading into [0, 2π).
pub fn wrap_heading(r: f64) -> f64 {
    r.rem_euclid(std::f64::consts::TAU)
}
