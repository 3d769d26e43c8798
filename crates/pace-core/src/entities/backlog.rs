use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// Queued but unstarted work for a team.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BacklogItem {
    pub id: String,
    pub priority: Priority,
    pub team_id: String,
    /// Optional rank within the priority tier (ascending = earlier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_rank: Option<i64>,
}
