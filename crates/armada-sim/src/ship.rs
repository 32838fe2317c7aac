//! A single autonomous ship: wireframe hull, bearing-based steering,
//! fixed-step motion, and the break-apart death animation.

use glam::{DVec2, Vec2};

use armada_core::constants::{
    DIRECTION_EPSILON, FRAGMENT_STEP, HULL_POINTS, OPACITY_DECAY, OPACITY_FLOOR, STEER_DEAD_ZONE,
};
use armada_core::enums::Lifecycle;
use armada_core::state::WireframeSink;
use armada_core::types::wrap_heading;

/// Hull template in local coordinates. The nose points along +Y, which
/// corresponds to a heading of π/2.
const HULL_TEMPLATE: [Vec2; HULL_POINTS] = [
    Vec2::new(0.0, 15.0),
    Vec2::new(10.0, -15.0),
    Vec2::new(0.0, -10.0),
    Vec2::new(-10.0, -15.0),
];

/// Fragment spray directions relative to the heading, one per hull vertex.
const FRAGMENT_ANGLES: [f64; HULL_POINTS] = [
    -std::f64::consts::FRAC_PI_4,
    -3.0 * std::f64::consts::FRAC_PI_4,
    3.0 * std::f64::consts::FRAC_PI_4,
    std::f64::consts::FRAC_PI_4,
];

/// One autonomous ship.
///
/// Geometry lives in f32 world units; heading and turn math in f64.
#[derive(Debug, Clone)]
pub struct Ship {
    /// Rotated hull vertices in local coordinates.
    hull: [Vec2; HULL_POINTS],
    /// Per-vertex fragment anchors, meaningful only while `Dying`.
    drift: [Vec2; HULL_POINTS],
    position: Vec2,
    /// Heading in radians, kept in [0, 2π).
    heading: f64,
    /// Maximum angular step per steering decision.
    turn_rate: f64,
    /// Forward step per frame.
    acceleration: f32,
    color: [f32; 3],
    opacity: f32,
    /// Pending-death latch; applied at the next `integrate`.
    doomed: bool,
    state: Lifecycle,
}

impl Ship {
    /// Create a ship at `position` facing `heading` radians.
    pub fn new(
        position: Vec2,
        heading: f64,
        turn_rate: f64,
        acceleration: f32,
        color: [f32; 3],
    ) -> Self {
        let mut ship = Self {
            hull: HULL_TEMPLATE,
            drift: [Vec2::ZERO; HULL_POINTS],
            position,
            // Template orientation; rotated to the requested heading below.
            heading: std::f64::consts::FRAC_PI_2,
            turn_rate,
            acceleration,
            color,
            opacity: 1.0,
            doomed: false,
            state: Lifecycle::Alive,
        };
        ship.rotate_by(heading - ship.heading);
        ship
    }

    /// Rotate the hull and heading by `angle` radians about the local
    /// origin. Heading is re-normalized into [0, 2π).
    pub fn rotate_by(&mut self, angle: f64) {
        let rot = Vec2::from_angle(angle as f32);
        for v in &mut self.hull {
            *v = rot.rotate(*v);
        }
        self.heading = wrap_heading(self.heading + angle);
    }

    /// One manual turn step counter-clockwise.
    pub fn turn_left(&mut self) {
        self.rotate_by(self.turn_rate);
    }

    /// One manual turn step clockwise.
    pub fn turn_right(&mut self) {
        self.rotate_by(-self.turn_rate);
    }

    /// Snap the heading straight at `target` (spawn alignment).
    pub fn aim_at(&mut self, target: Vec2) {
        self.turn_toward(target, f64::INFINITY);
    }

    /// One bounded steering decision toward `target`.
    pub fn steer_toward(&mut self, target: Vec2) {
        self.turn_toward(target, self.turn_rate);
    }

    /// Shared bearing computation: rotate toward `target` by at most
    /// `max_step` radians, shortest way around.
    fn turn_toward(&mut self, target: Vec2, max_step: f64) {
        let to_target = (target - self.position).as_dvec2();
        // A target on top of the ship has no bearing; skip the decision
        // rather than normalize a zero-length vector.
        if to_target.length_squared() < DIRECTION_EPSILON {
            return;
        }
        let dir = to_target.normalize();
        let facing = DVec2::from_angle(self.heading);
        let delta = dir.dot(facing).clamp(-1.0, 1.0).acos();
        if delta < STEER_DEAD_ZONE {
            return;
        }
        let step = delta.min(max_step);
        if dir.perp_dot(facing) < 0.0 {
            self.rotate_by(step);
        } else {
            self.rotate_by(-step);
        }
    }

    /// Advance one fixed step of the current lifecycle state.
    pub fn integrate(&mut self) {
        match self.state {
            Lifecycle::Alive => {
                if self.doomed {
                    // Capture the final position as the fragment origin;
                    // fragment motion starts on the next call.
                    self.drift = [self.position; HULL_POINTS];
                    self.state = Lifecycle::Dying;
                } else {
                    let step = DVec2::from_angle(self.heading) * self.acceleration as f64;
                    self.position += step.as_vec2();
                }
            }
            Lifecycle::Dying => {
                for (anchor, angle) in self.drift.iter_mut().zip(FRAGMENT_ANGLES) {
                    let dir = DVec2::from_angle(self.heading + angle);
                    *anchor += (dir * FRAGMENT_STEP as f64).as_vec2();
                }
            }
            Lifecycle::Idle => {}
        }
    }

    /// Latch the pending-death flag. The lifecycle transition happens at
    /// the next `integrate` so the current frame renders consistent data.
    pub fn mark_dead(&mut self) {
        self.doomed = true;
    }

    /// Fade one step while dying. Returns true once the ship has fully
    /// faded; opacity is forced to exactly zero at that point.
    pub fn decay_opacity(&mut self) -> bool {
        if self.state != Lifecycle::Dying {
            return false;
        }
        self.opacity *= OPACITY_DECAY;
        if self.opacity < OPACITY_FLOOR {
            self.opacity = 0.0;
            return true;
        }
        false
    }

    /// Emit this ship's wireframe for the current frame.
    ///
    /// Fading advances here rather than in `integrate`, so the fade rate
    /// follows the render rate. A ship that finishes fading still emits
    /// its final frame at zero opacity before going inert.
    pub fn render(&mut self, sink: &mut impl WireframeSink) {
        match self.state {
            Lifecycle::Alive => {
                let points = self.hull.map(|v| v + self.position);
                sink.emit(&points, self.color, self.opacity);
            }
            Lifecycle::Dying => {
                if self.decay_opacity() {
                    self.state = Lifecycle::Idle;
                }
                let points: [Vec2; HULL_POINTS] =
                    std::array::from_fn(|i| self.hull[i] + self.drift[i]);
                sink.emit(&points, self.color, self.opacity);
            }
            Lifecycle::Idle => {}
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn turn_rate(&self) -> f64 {
        self.turn_rate
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn hull(&self) -> &[Vec2; HULL_POINTS] {
        &self.hull
    }

    pub fn drift(&self) -> &[Vec2; HULL_POINTS] {
        &self.drift
    }
}
