//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default snapshot document path.
fn default_snapshot_path() -> String {
    String::from("pace-snapshot.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Snapshot document read when `--snapshot` is not given.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}
