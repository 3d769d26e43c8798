//! Input entities supplied by the external stores.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so a
//! snapshot document can be validated before it reaches the engine.

mod backlog;
mod history;
mod objective;
mod unit;

pub use backlog::BacklogItem;
pub use history::{CompletionRecord, TeamHistory};
pub use objective::{DependencyEdge, Objective, Project};
pub use unit::OrgUnit;
