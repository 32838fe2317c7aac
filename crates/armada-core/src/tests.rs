#[cfg(test)]
mod tests {
    use glam::Vec2;
    use std::f64::consts::TAU;

    use crate::commands::FleetCommand;
    use crate::enums::Lifecycle;
    use crate::state::{FrameSnapshot, WireframeSink};
    use crate::types::{wrap_heading, SimTime};

    /// Verify Lifecycle round-trips through serde_json.
    #[test]
    fn test_lifecycle_serde() {
        let variants = vec![Lifecycle::Alive, Lifecycle::Dying, Lifecycle::Idle];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Lifecycle = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify FleetCommand round-trips through serde (tagged union).
    #[test]
    fn test_fleet_command_serde() {
        let commands = vec![FleetCommand::KillAll, FleetCommand::Kill { index: 7 }];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: FleetCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since FleetCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.ships, back.ships);
        // Verify the empty snapshot is reasonably small
        assert!(
            json.len() < 256,
            "Empty snapshot should be <256 bytes, was {} bytes",
            json.len()
        );
    }

    /// A snapshot records emits verbatim, in order.
    #[test]
    fn test_snapshot_collects_emits() {
        let mut snapshot = FrameSnapshot::new(SimTime::default(), Vec2::new(4.0, 5.0));

        let first = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let second = [Vec2::new(2.0, 2.0), Vec2::new(3.0, 2.0), Vec2::new(2.0, 3.0)];
        snapshot.emit(&first, [1.0, 0.0, 0.0], 1.0);
        snapshot.emit(&second, [0.0, 1.0, 0.0], 0.5);

        assert_eq!(snapshot.ships.len(), 2);
        assert_eq!(snapshot.ships[0].points, first.to_vec());
        assert_eq!(snapshot.ships[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(snapshot.ships[1].points, second.to_vec());
        assert_eq!(snapshot.ships[1].opacity, 0.5);
    }

    /// Verify heading wrapping lands in [0, 2π).
    #[test]
    fn test_wrap_heading() {
        assert!((wrap_heading(TAU + 1.0) - 1.0).abs() < 1e-12);
        assert!((wrap_heading(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert_eq!(wrap_heading(0.0), 0.0);
        for r in [-100.0, -TAU, -1e-9, 0.0, 1.0, TAU, 1e6] {
            let wrapped = wrap_heading(r);
            assert!(
                (0.0..TAU).contains(&wrapped),
                "wrap_heading({r}) = {wrapped} out of range"
            );
        }
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 decisions at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
