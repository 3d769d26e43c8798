use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A node of the organizational tree. Leaf units are teams.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OrgUnit {
    pub unit_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Depth label from the org chart (0 = top level).
    #[serde(default)]
    pub tier: u8,
}
