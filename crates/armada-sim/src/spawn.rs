//! Spawn factories for populating the fleet.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use armada_core::constants::{ACCEL_MAX, ACCEL_MIN, TURN_RATE_MAX, TURN_RATE_MIN};

use crate::ship::Ship;

/// Spawn `count` ships uniformly inside `bounds`, aimed at `target`.
pub fn spawn_fleet(rng: &mut ChaCha8Rng, count: usize, bounds: Vec2, target: Vec2) -> Vec<Ship> {
    (0..count).map(|_| spawn_ship(rng, bounds, target)).collect()
}

/// Spawn a single ship with randomized position, turn rate, acceleration,
/// and color, heading snapped straight at `target`.
pub fn spawn_ship(rng: &mut ChaCha8Rng, bounds: Vec2, target: Vec2) -> Ship {
    let position = Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y));
    let turn_rate = rng.gen_range(TURN_RATE_MIN..TURN_RATE_MAX);
    let acceleration = rng.gen_range(ACCEL_MIN..ACCEL_MAX);
    let color = [
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    ];

    let mut ship = Ship::new(position, 0.0, turn_rate, acceleration, color);
    ship.aim_at(target);
    ship
}
