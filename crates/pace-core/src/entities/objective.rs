use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DependencyType;

/// A directed dependency between two objectives.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DependencyEdge {
    pub predecessor_objective_id: String,
    pub successor_objective_id: String,
    #[serde(rename = "type", default)]
    pub dependency_type: DependencyType,
}

/// A unit of planned outcome, assigned to teams and optionally decomposed
/// into child objectives.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Objective {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub parent_objective_id: Option<String>,
    /// Team ids, or ids of higher org units that resolve to their teams.
    #[serde(default)]
    pub assigned_team_ids: Vec<String>,
    #[serde(default)]
    pub dependency_edges: Vec<DependencyEdge>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Work items this objective adds to each assigned team's queue.
    #[serde(default)]
    pub new_item_count: i64,
}

/// A project: a flat list of objectives whose parent links form the tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
}
