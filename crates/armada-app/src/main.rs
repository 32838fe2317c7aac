use std::f32::consts::TAU;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use armada_app::game_loop::{frame_duration, spawn_frame_loop};
use armada_app::state::LoopCommand;
use armada_core::commands::FleetCommand;
use armada_sim::engine::SimConfig;

/// Headless armada demo: a fleet of wireframe ships chasing a scripted
/// pointer, with a mid-run fleet kill.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of ships to spawn.
    #[arg(long, default_value_t = 1000)]
    ships: usize,

    /// RNG seed for the fleet.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pointer steps to script before shutting down.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Paced frame rate (Hz).
    #[arg(long, default_value_t = 120)]
    fps: u32,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run(Cli::parse()) {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("{cli:?}");

    let config = SimConfig {
        seed: cli.seed,
        fleet_size: cli.ships,
        ..Default::default()
    };
    let bounds = config.bounds;
    let handle = spawn_frame_loop(config, cli.fps);

    let pace = frame_duration(cli.fps);
    let center = bounds * 0.5;
    let radius = bounds.y * 0.25;

    for frame in 0..cli.frames {
        // Scripted pointer: one slow orbit around the world center.
        let phase = frame as f32 / cli.frames.max(1) as f32 * TAU;
        let pointer = center + radius * Vec2::new(phase.cos(), phase.sin());
        handle
            .command_tx
            .send(LoopCommand::PointerMoved {
                x: pointer.x,
                y: pointer.y,
            })
            .context("frame loop stopped early")?;

        if frame == cli.frames * 2 / 3 {
            log::info!("killing the fleet at pointer step {frame}");
            handle
                .command_tx
                .send(LoopCommand::Fleet(FleetCommand::KillAll))
                .context("frame loop stopped early")?;
        }

        thread::sleep(pace);
    }

    handle.command_tx.send(LoopCommand::Shutdown).ok();
    handle
        .thread
        .join()
        .map_err(|_| anyhow::anyhow!("frame loop panicked"))?;

    let slot = handle
        .latest_snapshot
        .lock()
        .map_err(|_| anyhow::anyhow!("snapshot slot poisoned"))?;
    let snapshot = slot.as_ref().context("no frame was ever published")?;
    log::info!(
        "ran {} steering decisions; {} of {} ships still visible",
        snapshot.time.tick,
        snapshot.ships.len(),
        cli.ships
    );

    Ok(())
}
