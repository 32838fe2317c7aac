//! Fleet engine — the swarm controller.
//!
//! Owns the ship population, processes fleet commands, runs the steering
//! pass at a fixed decision rate decoupled from the frame rate, and runs
//! the motion pass every frame.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use armada_core::commands::FleetCommand;
use armada_core::constants::{DECISION_PERIOD, DEFAULT_FLEET_SIZE, WORLD_HEIGHT, WORLD_WIDTH};
use armada_core::state::WireframeSink;
use armada_core::types::SimTime;

use crate::ship::Ship;
use crate::spawn;
use crate::systems;

/// Configuration for starting a new fleet.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same fleet.
    pub seed: u64,
    /// Number of ships to spawn.
    pub fleet_size: usize,
    /// World bounds; spawn positions are uniform inside them.
    pub bounds: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fleet_size: DEFAULT_FLEET_SIZE,
            bounds: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
        }
    }
}

/// The fleet engine. Owns the population and all sim state.
pub struct FleetEngine {
    ships: Vec<Ship>,
    time: SimTime,
    /// Seconds since the last steering decision.
    accumulator: f64,
    target: Vec2,
    command_queue: VecDeque<FleetCommand>,
}

impl FleetEngine {
    /// Spawn the fleet described by `config`, aimed at the initial
    /// target (the origin, until the first frame reports a pointer).
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let target = Vec2::ZERO;
        let ships = spawn::spawn_fleet(&mut rng, config.fleet_size, config.bounds, target);
        Self {
            ships,
            time: SimTime::default(),
            accumulator: 0.0,
            target,
            command_queue: VecDeque::new(),
        }
    }

    /// Queue a fleet command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: FleetCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance one frame: drain commands, steer if a decision is due,
    /// then integrate every ship.
    ///
    /// `dt_frame` is the wall-clock seconds since the previous frame; it
    /// feeds only the decision accumulator — motion itself is one fixed
    /// step per frame. Steering for a frame always completes before
    /// integration starts.
    pub fn frame(&mut self, dt_frame: f64, target: Vec2) {
        self.process_commands();
        self.target = target;

        self.accumulator += dt_frame;
        if self.accumulator >= DECISION_PERIOD {
            self.accumulator = 0.0;
            self.time.advance();
            systems::steering::run(&mut self.ships, self.target);
        }

        systems::motion::run(&mut self.ships);
    }

    /// Emit draw calls for every visible ship, in population order.
    ///
    /// Takes `&mut self`: rendering a dying ship advances its fade.
    pub fn draw(&mut self, sink: &mut impl WireframeSink) {
        systems::render::run(&mut self.ships, sink);
    }

    /// Begin the death animation for every ship.
    pub fn kill_all(&mut self) {
        for ship in &mut self.ships {
            ship.mark_dead();
        }
    }

    /// Begin the death animation for one ship. Out-of-range indices are
    /// ignored.
    pub fn kill(&mut self, index: usize) {
        if let Some(ship) = self.ships.get_mut(index) {
            ship.mark_dead();
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                FleetCommand::KillAll => self.kill_all(),
                FleetCommand::Kill { index } => self.kill(index),
            }
        }
    }
}
