//! Driver configuration read from `AERIE_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use aerie_core::constants::TICK_RATE;
use aerie_sim::SimConfig;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_SAVE_PATH: &str = "aerie-save.json";
pub const DEFAULT_RUN_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u64,
    /// Frames per second. Always non-zero.
    pub tick_rate: u32,
    pub save_path: PathBuf,
    /// How long the scripted session runs before shutting down.
    pub run_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tick_rate: TICK_RATE,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            run_secs: DEFAULT_RUN_SECS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Unparsable values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let tick_rate = read_u64(&lookup, "AERIE_TICK_RATE", u64::from(defaults.tick_rate));
        let tick_rate = match u32::try_from(tick_rate) {
            Ok(rate) if rate > 0 => rate,
            _ => {
                tracing::warn!(
                    "AERIE_TICK_RATE ({}) out of range. Falling back to {}.",
                    tick_rate,
                    defaults.tick_rate
                );
                defaults.tick_rate
            }
        };

        Self {
            seed: read_u64(&lookup, "AERIE_SEED", defaults.seed),
            tick_rate,
            save_path: lookup("AERIE_SAVE_PATH")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.save_path),
            run_secs: read_u64(&lookup, "AERIE_RUN_SECS", defaults.run_secs),
        }
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            ..Default::default()
        }
    }

    /// Nominal duration of one frame.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate))
    }

    /// Fixed `dt` handed to the simulation each frame.
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate)
    }
}

fn read_u64(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!("{} ({:?}) is not a valid integer. Using {}.", name, raw, default);
            default
        }),
    }
}
