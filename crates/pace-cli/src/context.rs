use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use pace_config::PaceConfig;
use pace_core::snapshot::Snapshot;
use pace_forecast::{ForecastContext, ForecastService, ForecastSettings};

use crate::cli::GlobalFlags;

/// Everything a snapshot-backed command needs, loaded once per invocation.
pub struct AppContext {
    pub config: PaceConfig,
    pub snapshot: Snapshot,
    /// The single "now" every answer of this run is anchored to.
    pub now: DateTime<Utc>,
}

impl AppContext {
    pub fn init(config: PaceConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = snapshot_path(flags, &config);
        let snapshot = load_snapshot(&path)?;
        let now = resolve_now(flags.as_of, &snapshot);
        tracing::debug!(snapshot = %path.display(), %now, "application context ready");

        Ok(Self {
            config,
            snapshot,
            now,
        })
    }

    #[must_use]
    pub fn forecast_context(&self) -> ForecastContext {
        ForecastContext::new(self.now, ForecastSettings::from(&self.config.forecast))
    }

    #[must_use]
    pub fn service(&self) -> ForecastService<'_, Snapshot> {
        ForecastService::new(&self.snapshot, self.forecast_context())
    }
}

fn snapshot_path(flags: &GlobalFlags, config: &PaceConfig) -> PathBuf {
    flags
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.general.snapshot_path))
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    Snapshot::from_path(path).with_context(|| {
        format!(
            "failed to load planning snapshot at {} (set --snapshot or general.snapshot_path)",
            path.display()
        )
    })
}

/// `--as-of`, else the snapshot's capture time, else the wall clock.
pub fn resolve_now(as_of: Option<DateTime<Utc>>, snapshot: &Snapshot) -> DateTime<Utc> {
    as_of.or(snapshot.captured_at).unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn as_of_wins_over_captured_at() {
        let captured = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
        let as_of = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let snapshot = Snapshot {
            captured_at: Some(captured),
            ..Snapshot::default()
        };

        assert_eq!(resolve_now(Some(as_of), &snapshot), as_of);
        assert_eq!(resolve_now(None, &snapshot), captured);
    }

    #[test]
    fn snapshot_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"captured_at":"2026-03-02T09:00:00Z","backlog":[{{"id":"a","priority":"P1","team_id":"core"}}]}}"#
        )
        .expect("write snapshot");

        let snapshot = load_snapshot(file.path()).expect("snapshot should load");
        assert_eq!(snapshot.backlog.len(), 1);
        assert!(snapshot.captured_at.is_some());
    }

    #[test]
    fn missing_snapshot_error_names_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        let error = load_snapshot(&path).expect_err("missing file should fail");
        assert!(format!("{error:#}").contains("absent.json"));
    }
}
