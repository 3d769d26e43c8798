//! Snapshot builders shared by the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use pace_core::entities::{
    BacklogItem, CompletionRecord, DependencyEdge, Objective, OrgUnit, Project, TeamHistory,
};
use pace_core::enums::{DependencyType, Priority};
use pace_core::snapshot::Snapshot;
use pace_forecast::{ForecastContext, ForecastSettings};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

pub fn ctx() -> ForecastContext {
    ForecastContext::new(now(), ForecastSettings::default())
}

/// `today + days`.
pub fn day(days: u64) -> NaiveDate {
    now()
        .date_naive()
        .checked_add_days(chrono::Days::new(days))
        .unwrap()
}

pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot {
                captured_at: Some(now()),
                ..Snapshot::default()
            },
        }
    }

    pub fn unit(mut self, id: &str, parent: Option<&str>) -> Self {
        self.snapshot.units.push(OrgUnit {
            unit_id: id.into(),
            parent_id: parent.map(str::to_string),
            tier: u8::from(parent.is_some()),
        });
        self
    }

    /// A team finishing 30 items in the last 30 days (1 item/day) with
    /// `queued` P1/P2 items and `p3` P3 items waiting.
    pub fn team(mut self, id: &str, queued: usize, p3: usize) -> Self {
        let completions = (0..30)
            .map(|i| CompletionRecord {
                completed_at: now() - TimeDelta::hours(i * 12),
            })
            .collect();
        self.snapshot.history.insert(
            id.into(),
            TeamHistory {
                completions,
                weekly_counts: Vec::new(),
            },
        );
        for i in 0..queued {
            let priority = if i % 2 == 0 { Priority::P1 } else { Priority::P2 };
            self = self.item(&format!("{id}-q{i}"), priority, id);
        }
        for i in 0..p3 {
            self = self.item(&format!("{id}-l{i}"), Priority::P3, id);
        }
        self
    }

    pub fn weekly(mut self, team: &str, counts: &[i64]) -> Self {
        self.snapshot
            .history
            .entry(team.into())
            .or_default()
            .weekly_counts = counts.to_vec();
        self
    }

    pub fn item(mut self, id: &str, priority: Priority, team: &str) -> Self {
        self.snapshot.backlog.push(BacklogItem {
            id: id.into(),
            priority,
            team_id: team.into(),
            stack_rank: None,
        });
        self
    }

    pub fn project(mut self, project: Project) -> Self {
        self.snapshot.projects.push(project);
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

pub fn objective(id: &str, teams: &[&str]) -> Objective {
    Objective {
        id: id.into(),
        title: None,
        parent_objective_id: None,
        assigned_team_ids: teams.iter().map(|t| (*t).to_string()).collect(),
        dependency_edges: Vec::new(),
        target_date: None,
        new_item_count: 0,
    }
}

pub fn depends_on(mut objective: Objective, predecessor: &str) -> Objective {
    objective.dependency_edges.push(DependencyEdge {
        predecessor_objective_id: predecessor.into(),
        successor_objective_id: objective.id.clone(),
        dependency_type: DependencyType::FinishToStart,
    });
    objective
}

pub fn child_of(mut objective: Objective, parent: &str) -> Objective {
    objective.parent_objective_id = Some(parent.into());
    objective
}

pub fn project(id: &str, objectives: Vec<Objective>) -> Project {
    Project {
        id: id.into(),
        name: None,
        target_date: None,
        objectives,
    }
}
