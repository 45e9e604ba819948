//! Host settings
//!
//! Loaded from a JSON file (path from `GRAVITY_CLIMB_SETTINGS`, default
//! `settings.json`). Every field has a default, so partial files work.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "GRAVITY_CLIMB_SETTINGS";
/// Environment variable overriding the run seed
pub const SEED_ENV: &str = "GRAVITY_CLIMB_SEED";

/// Host configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed (None = derive from the clock)
    pub seed: Option<u64>,
    /// High score stats file
    pub stats_path: PathBuf,
    /// Stop a headless run after this many ticks
    pub max_ticks: Option<u64>,
    /// Let the demo autopilot drive the player
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            stats_path: PathBuf::from("stats.json"),
            max_ticks: Some(60 * 60 * 10),
            autopilot: true,
        }
    }
}

impl Settings {
    /// Load settings from the configured file and apply env overrides
    pub fn load() -> Self {
        let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| "settings.json".to_string());
        let mut settings = Self::load_from(Path::new(&path));
        if let Ok(seed) = std::env::var(SEED_ENV) {
            settings.apply_seed_override(&seed);
        }
        settings
    }

    /// Load from a file, falling back to defaults if missing or unparseable
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Settings>(&content) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Apply a textual seed override; invalid values are ignored with a warning
    pub fn apply_seed_override(&mut self, value: &str) {
        match value.trim().parse::<u64>() {
            Ok(seed) => self.seed = Some(seed),
            Err(e) => log::warn!("Ignoring {SEED_ENV}={value:?}: {e}"),
        }
    }

    /// Seed to use for this run
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
