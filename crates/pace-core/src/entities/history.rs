use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One finished piece of work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletionRecord {
    pub completed_at: DateTime<Utc>,
}

/// Completion history for one team, in either or both supported shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamHistory {
    /// Raw completion timestamps, consumed by the windowed throughput mode.
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
    /// Pre-bucketed completed counts per week, consumed by the bucketed mode.
    #[serde(default)]
    pub weekly_counts: Vec<i64>,
}
