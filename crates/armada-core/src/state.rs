//! Frame snapshot — the visible state emitted to a rendering backend.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::SimTime;

/// Sink for wireframe draw calls.
///
/// One `emit` per visible ship per frame: a closed polyline in world
/// coordinates plus color and opacity. Implementations are not assumed
/// thread-safe; the draw pass stays sequential.
pub trait WireframeSink {
    fn emit(&mut self, points: &[Vec2], color: [f32; 3], opacity: f32);
}

/// One ship's draw call, as recorded by a [`FrameSnapshot`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    /// Closed polyline vertices in world coordinates.
    pub points: Vec<Vec2>,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Complete visible state of one frame.
///
/// Implements [`WireframeSink`], so the draw pass can render straight
/// into it; the result serializes for frontends and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub target: Vec2,
    pub ships: Vec<ShipView>,
}

impl FrameSnapshot {
    pub fn new(time: SimTime, target: Vec2) -> Self {
        Self {
            time,
            target,
            ships: Vec::new(),
        }
    }
}

impl WireframeSink for FrameSnapshot {
    fn emit(&mut self, points: &[Vec2], color: [f32; 3], opacity: f32) {
        self.ships.push(ShipView {
            points: points.to_vec(),
            color,
            opacity,
        });
    }
}
