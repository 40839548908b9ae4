use std::time::Duration;

use glam::DVec3;
use tracing_subscriber::filter::EnvFilter;

use aerie_app::config::AppConfig;
use aerie_app::state::{AppState, GameLoopCommand};
use aerie_core::commands::ControlSignal;

/// Scripted demo session: walk to the nearest powerup, take off, shoot toward
/// the boss, save, then restore the save after drifting away.
fn script() -> Vec<GameLoopCommand> {
    let toward_boss = DVec3::new(1.0, 0.0, 1.0);
    vec![
        GameLoopCommand::Control(ControlSignal::moving(1.0, 1.0)),
        GameLoopCommand::Control(ControlSignal {
            flight: true,
            aim: toward_boss,
            ..ControlSignal::moving(0.5, 0.5)
        }),
        GameLoopCommand::Fire { aim: toward_boss },
        GameLoopCommand::Save,
        GameLoopCommand::Control(ControlSignal {
            boost: true,
            ..ControlSignal::moving(-1.0, 0.0)
        }),
        GameLoopCommand::Pause,
        GameLoopCommand::Resume,
        GameLoopCommand::Load,
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        seed = config.seed,
        tick_rate = config.tick_rate,
        save_path = %config.save_path.display(),
        run_secs = config.run_secs,
        "starting headless session"
    );

    let run_time = Duration::from_secs(config.run_secs);
    let state = AppState::new();
    state.start(config)?;

    let script = script();
    let pause = run_time / (script.len() as u32 + 1);
    for command in script {
        std::thread::sleep(pause);
        tracing::debug!(?command, "sending");
        state.send(command)?;
    }
    std::thread::sleep(pause);

    state.shutdown()?;

    if let Some(snapshot) = state.snapshot()? {
        tracing::info!(
            tick = snapshot.time.tick,
            x = snapshot.player.position.x,
            y = snapshot.player.position.y,
            z = snapshot.player.position.z,
            health = snapshot.player.health,
            energy = snapshot.player.energy,
            drones = snapshot.drones.len(),
            boss_alive = snapshot.boss.is_some(),
            "session finished"
        );
    }
    Ok(())
}
