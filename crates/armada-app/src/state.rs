//! Commands and handles shared between the driver and the frame-loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use armada_core::commands::FleetCommand;
use armada_core::state::FrameSnapshot;

/// Commands sent from the input layer to the frame-loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A fleet command to forward to the engine.
    Fleet(FleetCommand),
    /// The pointer moved; future steering decisions chase this point.
    PointerMoved { x: f32, y: f32 },
    /// Shut down the frame-loop thread gracefully.
    Shutdown,
}

/// Handle to a running frame loop.
pub struct LoopHandle {
    /// Channel sender to forward commands to the frame-loop thread.
    pub command_tx: mpsc::Sender<LoopCommand>,
    /// Latest snapshot, updated by the frame-loop thread after each
    /// frame, for synchronous polling.
    pub latest_snapshot: Arc<Mutex<Option<FrameSnapshot>>>,
    /// The frame-loop thread itself.
    pub thread: JoinHandle<()>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::PointerMoved { x: 1.0, y: 2.0 }).unwrap();
        tx.send(LoopCommand::Fleet(FleetCommand::KillAll)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::PointerMoved { x, y } if x == 1.0 && y == 2.0
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Fleet(FleetCommand::KillAll)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }
}
