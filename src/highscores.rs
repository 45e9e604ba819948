//! High score record
//!
//! Persisted as a small JSON stats file (`{"highest_score": N}`). Read once at
//! run start, written once at run end. A missing or corrupt file is never
//! fatal: it reads as a zero record.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Best-score record plus any other keys found in the stats file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    pub highest_score: u64,
    /// Unknown keys, preserved on rewrite
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HighScores {
    /// Create empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished run's score in. Returns true on a new record.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.highest_score {
            self.highest_score = score;
            true
        } else {
            false
        }
    }

    /// Load the record, defaulting to zero if absent or unreadable
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No high score at {} ({e}), starting fresh", path.display());
                return Self::new();
            }
        };

        let mut extra = match serde_json::from_str::<Value>(&json) {
            Ok(Value::Object(map)) => map.into_iter().collect::<BTreeMap<_, _>>(),
            Ok(_) | Err(_) => {
                log::warn!("Corrupt high score file {}, using 0", path.display());
                return Self::new();
            }
        };

        // A malformed score resets to zero; the other keys survive the rewrite
        let highest_score = match extra.remove("highest_score") {
            None => 0,
            Some(value) => value.as_u64().unwrap_or_else(|| {
                log::warn!("Bad highest_score {value} in {}, using 0", path.display());
                0
            }),
        };
        log::info!("Loaded high score {highest_score}");
        Self {
            highest_score,
            extra,
        }
    }

    /// Save the record; failures are logged, never propagated
    pub fn save(&self, path: &Path) {
        match self.write_to(path) {
            Ok(()) => log::info!("High score saved ({})", self.highest_score),
            Err(e) => log::warn!("Failed to save high score to {}: {e}", path.display()),
        }
    }

    fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}
