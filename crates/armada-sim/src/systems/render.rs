//! Render pass: emit every visible ship's wireframe into a sink.

use armada_core::state::WireframeSink;

use crate::ship::Ship;

/// Emit draw calls in population order.
///
/// The pass is sequential: the sink is not assumed thread-safe, and
/// ships do not occlude one another, so order carries no visual meaning.
pub fn run(ships: &mut [Ship], sink: &mut impl WireframeSink) {
    for ship in ships {
        ship.render(sink);
    }
}
