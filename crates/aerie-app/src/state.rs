//! Driver state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use glam::DVec3;

use aerie_core::commands::ControlSignal;
use aerie_core::state::WorldSnapshot;

use crate::config::AppConfig;
use crate::game_loop;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// Replace the held control signal.
    Control(ControlSignal),
    /// Fire once on the next frame along `aim`.
    Fire { aim: DVec3 },
    /// Stop advancing the simulation. Commands are still handled.
    Pause,
    Resume,
    /// Write the player state to the configured save path.
    Save,
    /// Restore the player state from the configured save path.
    Load,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running driver.
///
/// - `command_tx` is `None` until `start` is called.
/// - `latest_snapshot` is shared with the loop thread and updated every frame.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    pub running: Mutex<bool>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if not already running.
    pub fn start(&self, config: AppConfig) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("Simulation already running".into());
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn game loop: {}", e))?;

        *self.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
        *self.loop_handle.lock().map_err(|e| e.to_string())? = Some(handle);
        *running = true;
        Ok(())
    }

    pub fn send(&self, command: GameLoopCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| format!("Failed to send command: {}", e)),
            None => Err("Simulation not started".into()),
        }
    }

    /// Latest published snapshot, if a frame has run.
    pub fn snapshot(&self) -> Result<Option<WorldSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Send `Shutdown` and wait for the loop thread to exit.
    pub fn shutdown(&self) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if !*running {
            return Ok(());
        }
        if let Some(tx) = self.command_tx.lock().map_err(|e| e.to_string())?.take() {
            // A disconnected channel means the loop already exited.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        let handle = self.loop_handle.lock().map_err(|e| e.to_string())?.take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| "Game loop thread panicked".to_string())?;
        }
        *running = false;
        Ok(())
    }
}
