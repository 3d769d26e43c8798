//! In-memory snapshot of every store, loaded from a single JSON document.
//!
//! ```json
//! {
//!   "captured_at": "2026-03-02T09:00:00Z",
//!   "units": [{ "unit_id": "platform", "parent_id": null, "tier": 0 }],
//!   "backlog": [{ "id": "ISS-1", "priority": "P1", "team_id": "platform" }],
//!   "history": { "platform": { "completions": [], "weekly_counts": [3, 4] } },
//!   "projects": []
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BacklogItem, CompletionRecord, OrgUnit, Project, TeamHistory};
use crate::errors::CoreError;
use crate::stores::{BacklogStore, HistoryStore, ObjectiveStore, UnitStore};

/// A consistent point-in-time view of units, backlog, history, and projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    /// When the inputs were fetched. Used as the default "now" anchor.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub units: Vec<OrgUnit>,
    #[serde(default)]
    pub backlog: Vec<BacklogItem>,
    #[serde(default)]
    pub history: BTreeMap<String, TeamHistory>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Snapshot {
    /// Parse a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] for malformed JSON or invalid priority tiers.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read, or
    /// [`CoreError::Parse`] if it is not a valid snapshot.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

impl UnitStore for Snapshot {
    fn units(&self) -> &[OrgUnit] {
        &self.units
    }
}

impl HistoryStore for Snapshot {
    fn completions(&self, team_id: &str) -> &[CompletionRecord] {
        self.history
            .get(team_id)
            .map(|history| history.completions.as_slice())
            .unwrap_or_default()
    }

    fn weekly_counts(&self, team_id: &str) -> &[i64] {
        self.history
            .get(team_id)
            .map(|history| history.weekly_counts.as_slice())
            .unwrap_or_default()
    }

    fn has_history(&self, team_id: &str) -> bool {
        self.history.contains_key(team_id)
    }
}

impl BacklogStore for Snapshot {
    fn backlog(&self, team_id: &str) -> Vec<BacklogItem> {
        self.backlog
            .iter()
            .filter(|item| item.team_id == team_id)
            .cloned()
            .collect()
    }

    fn item(&self, item_id: &str) -> Option<&BacklogItem> {
        self.backlog.iter().find(|item| item.id == item_id)
    }
}

impl ObjectiveStore for Snapshot {
    fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::Priority;
    use crate::stores::ForecastSource;

    const DOC: &str = r#"{
        "captured_at": "2026-03-02T09:00:00Z",
        "units": [
            { "unit_id": "eng", "tier": 0 },
            { "unit_id": "platform", "parent_id": "eng", "tier": 1 },
            { "unit_id": "mobile", "parent_id": "eng", "tier": 1 }
        ],
        "backlog": [
            { "id": "A", "priority": "P2", "team_id": "platform" },
            { "id": "B", "priority": 1, "team_id": "mobile" },
            { "id": "C", "priority": "p3", "team_id": "platform", "stack_rank": 4 }
        ],
        "history": { "platform": { "weekly_counts": [3, 5] } }
    }"#;

    #[test]
    fn parses_document_and_normalizes_priorities() {
        let snapshot = Snapshot::from_json(DOC).unwrap();
        assert_eq!(snapshot.units.len(), 3);
        assert_eq!(snapshot.item("B").unwrap().priority, Priority::P1);
        assert_eq!(snapshot.item("C").unwrap().stack_rank, Some(4));
        assert!(snapshot.projects.is_empty());
    }

    #[test]
    fn backlog_is_scoped_to_team_in_arrival_order() {
        let snapshot = Snapshot::from_json(DOC).unwrap();
        let ids: Vec<String> = snapshot
            .backlog("platform")
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec!["A".to_string(), "C".to_string()]);
        assert!(snapshot.backlog("nobody").is_empty());
    }

    #[test]
    fn history_defaults_to_empty_slices() {
        let snapshot = Snapshot::from_json(DOC).unwrap();
        assert_eq!(snapshot.weekly_counts("platform"), &[3, 5]);
        assert!(snapshot.completions("platform").is_empty());
        assert!(snapshot.weekly_counts("mobile").is_empty());
        assert!(!snapshot.has_history("mobile"));
    }

    #[test]
    fn child_units_follow_parent_links() {
        let snapshot = Snapshot::from_json(DOC).unwrap();
        let children: Vec<&str> = snapshot
            .child_units("eng")
            .into_iter()
            .map(|unit| unit.unit_id.as_str())
            .collect();
        assert_eq!(children, vec!["platform", "mobile"]);
        assert!(snapshot.knows_team("mobile"));
        assert!(!snapshot.knows_team("design"));
    }

    #[test]
    fn invalid_priority_is_a_parse_error() {
        let err = Snapshot::from_json(
            r#"{ "backlog": [{ "id": "X", "priority": "urgent", "team_id": "t" }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Snapshot::from_path("/nonexistent/pace.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pace.json"));
    }
}
