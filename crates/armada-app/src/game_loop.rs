//! Frame-loop thread — drives the fleet engine and publishes snapshots.
//!
//! Commands arrive via `mpsc`. Each frame the engine advances by the
//! measured wall-clock delta (the engine's own accumulator throttles
//! steering decisions), the fleet is drawn into a fresh snapshot, and
//! the snapshot is stored for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use glam::Vec2;

use armada_core::state::FrameSnapshot;
use armada_sim::engine::{FleetEngine, SimConfig};

use crate::state::{LoopCommand, LoopHandle};

/// Nominal duration of one frame at the paced frame rate.
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / fps.max(1) as u64)
}

/// Spawn the frame loop in a new thread and return its handle.
pub fn spawn_frame_loop(config: SimConfig, fps: u32) -> LoopHandle {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let snapshot_slot = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("armada-frame-loop".into())
        .spawn(move || {
            run_frame_loop(config, fps, command_rx, &snapshot_slot);
        })
        .expect("failed to spawn frame loop thread");

    LoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    }
}

/// The frame loop. Runs until Shutdown or channel disconnect.
fn run_frame_loop(
    config: SimConfig,
    fps: u32,
    command_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) {
    let mut engine = FleetEngine::new(config);
    let mut target = engine.target();
    log::info!(
        "frame loop running {} ships at {fps} fps",
        engine.ships().len()
    );

    let frame_duration = frame_duration(fps);
    let mut next_frame_time = Instant::now();
    let mut previous_frame = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Fleet(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::PointerMoved { x, y }) => target = Vec2::new(x, y),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame by the measured delta
        let now = Instant::now();
        let dt_frame = now.duration_since(previous_frame).as_secs_f64();
        previous_frame = now;
        engine.frame(dt_frame, target);

        // 3. Draw and publish the frame
        let mut snapshot = FrameSnapshot::new(engine.time(), engine.target());
        engine.draw(&mut snapshot);
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armada_core::commands::FleetCommand;

    #[test]
    fn test_frame_duration() {
        // 120 fps = 8.333ms per frame
        let expected_nanos = 1_000_000_000u64 / 120;
        assert_eq!(frame_duration(120).as_nanos(), expected_nanos as u128);
        // A zero rate must not divide by zero.
        assert_eq!(frame_duration(0), frame_duration(1));
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let config = SimConfig {
            seed: 5,
            fleet_size: 8,
            ..Default::default()
        };
        let handle = spawn_frame_loop(config, 120);

        handle
            .command_tx
            .send(LoopCommand::PointerMoved { x: 640.0, y: 360.0 })
            .unwrap();
        handle
            .command_tx
            .send(LoopCommand::Fleet(FleetCommand::Kill { index: 0 }))
            .unwrap();

        // Give the loop a few frames to run.
        std::thread::sleep(Duration::from_millis(100));

        handle.command_tx.send(LoopCommand::Shutdown).unwrap();
        handle.thread.join().expect("frame loop panicked");

        let slot = handle.latest_snapshot.lock().unwrap();
        let snapshot = slot.as_ref().expect("no snapshot was published");
        assert_eq!(snapshot.ships.len(), 8);
        assert_eq!(snapshot.target, Vec2::new(640.0, 360.0));
        assert!(snapshot.time.tick > 0);
    }
}
