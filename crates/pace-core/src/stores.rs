//! Read-only contracts for the external collaborators that feed the engine.
//!
//! The engine never fetches anything itself. A caller gathers one consistent
//! snapshot behind these traits (concurrently, if it likes) and then invokes
//! the engine synchronously.

use crate::entities::{BacklogItem, CompletionRecord, OrgUnit, Project};

/// Organizational tree, used only for structure.
pub trait UnitStore {
    fn units(&self) -> &[OrgUnit];

    fn unit(&self, unit_id: &str) -> Option<&OrgUnit> {
        self.units().iter().find(|unit| unit.unit_id == unit_id)
    }

    /// Direct children of `unit_id`, in store order.
    fn child_units(&self, unit_id: &str) -> Vec<&OrgUnit> {
        self.units()
            .iter()
            .filter(|unit| unit.parent_id.as_deref() == Some(unit_id))
            .collect()
    }
}

/// Completion history per team, in both supported shapes.
pub trait HistoryStore {
    /// Raw completion records; empty when the team has none.
    fn completions(&self, team_id: &str) -> &[CompletionRecord];

    /// Pre-bucketed weekly completed counts; empty when the team has none.
    fn weekly_counts(&self, team_id: &str) -> &[i64];

    fn has_history(&self, team_id: &str) -> bool;
}

/// Queued work per team.
pub trait BacklogStore {
    /// Items for `team_id`, in arrival order.
    fn backlog(&self, team_id: &str) -> Vec<BacklogItem>;

    fn item(&self, item_id: &str) -> Option<&BacklogItem>;
}

/// Projects and their objective trees.
pub trait ObjectiveStore {
    fn project(&self, project_id: &str) -> Option<&Project>;
}

/// Everything the forecasting engine reads.
pub trait ForecastSource: UnitStore + HistoryStore + BacklogStore + ObjectiveStore {
    /// Whether `team_id` appears anywhere: as an org unit, a history key, or
    /// a backlog owner.
    fn knows_team(&self, team_id: &str) -> bool {
        self.unit(team_id).is_some()
            || self.has_history(team_id)
            || !self.backlog(team_id).is_empty()
    }
}

impl<T> ForecastSource for T where T: UnitStore + HistoryStore + BacklogStore + ObjectiveStore {}
