//! Steering pass: one bounded turn decision per ship toward the target.

use glam::Vec2;
use rayon::prelude::*;

use armada_core::enums::Lifecycle;

use crate::ship::Ship;

/// Issue one bounded steering decision to every non-Idle ship.
pub fn run(ships: &mut [Ship], target: Vec2) {
    ships
        .par_iter_mut()
        .filter(|ship| ship.state() != Lifecycle::Idle)
        .for_each(|ship| ship.steer_toward(target));
}
