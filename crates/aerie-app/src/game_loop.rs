//! Game loop thread: runs the simulation at a fixed rate and publishes
//! snapshots.
//!
//! The simulation is created inside this thread and never leaves it.
//! Commands arrive via `mpsc` channel; snapshots are stored in shared state
//! for polling.

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use glam::DVec3;

use aerie_core::commands::ControlSignal;
use aerie_core::error::SimError;
use aerie_core::events::TickEffects;
use aerie_core::state::WorldSnapshot;
use aerie_sim::Simulation;

use crate::config::AppConfig;
use crate::save_load::{self, SaveError};
use crate::state::GameLoopCommand;

/// Whether the loop should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Everything the loop thread owns between frames.
pub struct LoopState {
    sim: Simulation,
    /// Held input, re-sent every frame until replaced.
    held: ControlSignal,
    /// Aim of a `Fire` command waiting for the next frame.
    pending_fire: Option<DVec3>,
    paused: bool,
    save_path: PathBuf,
}

impl LoopState {
    pub fn new(config: &AppConfig) -> Result<Self, SimError> {
        Ok(Self {
            sim: Simulation::new(config.sim_config())?,
            held: ControlSignal::default(),
            pending_fire: None,
            paused: false,
            save_path: config.save_path.clone(),
        })
    }

    pub fn handle(&mut self, command: GameLoopCommand) -> Flow {
        match command {
            GameLoopCommand::Control(signal) => self.held = signal,
            GameLoopCommand::Fire { aim } => self.pending_fire = Some(aim),
            GameLoopCommand::Pause => {
                self.paused = true;
                tracing::info!(tick = self.sim.time().tick, "paused");
            }
            GameLoopCommand::Resume => {
                self.paused = false;
                tracing::info!(tick = self.sim.time().tick, "resumed");
            }
            GameLoopCommand::Save => {
                let state = self.sim.export_state();
                match save_load::save_to_file(&self.save_path, &state) {
                    Ok(()) => tracing::info!(path = %self.save_path.display(), "saved"),
                    Err(e) => tracing::warn!(error = %e, "save failed"),
                }
            }
            GameLoopCommand::Load => {
                let loaded = save_load::load_from_file(&self.save_path)
                    .and_then(|state| self.sim.import_state(&state).map_err(SaveError::from));
                match loaded {
                    Ok(()) => tracing::info!(path = %self.save_path.display(), "loaded"),
                    Err(e) => tracing::warn!(error = %e, "load failed"),
                }
            }
            GameLoopCommand::Shutdown => return Flow::Stop,
        }
        Flow::Continue
    }

    /// Run one frame. Returns `None` without touching the simulation while
    /// paused. The fire flag is consumed by the frame that sees it.
    pub fn step(&mut self, dt: f64) -> Option<TickEffects> {
        if self.paused {
            return None;
        }

        let mut signal = self.held;
        if let Some(aim) = self.pending_fire.take() {
            signal.fire = true;
            signal.aim = aim;
        }
        self.held.fire = false;

        Some(self.sim.advance(&signal, dt))
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.sim.snapshot()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("aerie-game-loop".into())
        .spawn(move || {
            run_game_loop(&config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: &AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
) {
    let mut state = match LoopState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to start simulation");
            return;
        }
    };
    let tick_duration = config.tick_duration();
    let dt = config.dt();
    let mut next_tick_time = Instant::now();

    tracing::info!(tick_rate = config.tick_rate, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if state.handle(command) == Flow::Stop {
                        tracing::info!(tick = state.simulation().time().tick, "game loop stopped");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame (skipped while paused)
        if let Some(effects) = state.step(dt) {
            for text in effects.texts() {
                tracing::debug!(text = %text.text, "notification");
            }
        }

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(state.snapshot());
        }

        // 4. Sleep until next frame
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, skip the backlog
            next_tick_time = now;
        }
    }
}
