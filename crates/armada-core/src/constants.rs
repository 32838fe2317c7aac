//! Simulation constants and tuning parameters.

/// Steering decision rate (Hz) — how often the fleet re-aims at the target.
pub const DECISION_RATE: u32 = 60;

/// Seconds between steering decisions.
pub const DECISION_PERIOD: f64 = 1.0 / DECISION_RATE as f64;

// --- Hull geometry ---

/// Vertices in a ship hull. Fixed for the whole run.
pub const HULL_POINTS: usize = 4;

// --- Steering ---

/// Smallest per-decision turn step (radians), drawn once at spawn.
pub const TURN_RATE_MIN: f64 = 0.025;

/// Largest per-decision turn step (radians), drawn once at spawn.
pub const TURN_RATE_MAX: f64 = 0.05;

/// Angular dead-zone (1°): misalignment below this produces no rotation.
pub const STEER_DEAD_ZONE: f64 = std::f64::consts::PI / 180.0;

/// Squared direction-vector length below which the steering target is
/// treated as coincident with the ship and the decision is skipped.
pub const DIRECTION_EPSILON: f64 = 1e-12;

// --- Motion ---

/// Smallest forward step per frame (world units), drawn once at spawn.
pub const ACCEL_MIN: f32 = 0.1;

/// Largest forward step per frame (world units), drawn once at spawn.
pub const ACCEL_MAX: f32 = 0.15;

// --- Death animation ---

/// Opacity multiplier applied once per rendered frame while a ship dies.
pub const OPACITY_DECAY: f32 = 0.9997;

/// Opacity below which a dying ship is forced to zero and goes inert.
pub const OPACITY_FLOOR: f32 = 0.01;

/// Distance each hull fragment drifts per frame while dying.
pub const FRAGMENT_STEP: f32 = 0.01;

// --- World / fleet defaults ---

/// Default world width in world units.
pub const WORLD_WIDTH: f32 = 1920.0;

/// Default world height in world units.
pub const WORLD_HEIGHT: f32 = 1080.0;

/// Default fleet size.
pub const DEFAULT_FLEET_SIZE: usize = 1000;
