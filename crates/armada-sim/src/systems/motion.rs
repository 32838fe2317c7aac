//! Motion pass: fixed-step lifecycle integration for every ship.

use rayon::prelude::*;

use crate::ship::Ship;

/// Integrate every ship one frame step. Idle ships are inert no-ops.
pub fn run(ships: &mut [Ship]) {
    ships.par_iter_mut().for_each(|ship| ship.integrate());
}
