//! Closed enums for priority tiers, dependency types, rate units, and forecast states.
//!
//! Status-like enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`Priority`] is the single normalization boundary for the tier values found in
//! upstream data (`"P1"`, `"p2"`, `"3"`, `1`); nothing downstream compares raw strings.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Backlog priority tier.
///
/// Ordering is queue order: `P1` is strictly ahead of `P2`, which is strictly
/// ahead of `P3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Priority {
    #[serde(rename = "P1")]
    P1,
    #[serde(rename = "P2")]
    P2,
    #[serde(rename = "P3")]
    P3,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }

    /// Map a numeric tier (`1..=3`) to a priority.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPriority`] for any other number.
    pub fn from_tier(tier: i64) -> Result<Self, CoreError> {
        match tier {
            1 => Ok(Self::P1),
            2 => Ok(Self::P2),
            3 => Ok(Self::P3),
            other => Err(CoreError::InvalidPriority(other.to_string())),
        }
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('P')
            .or_else(|| trimmed.strip_prefix('p'))
            .unwrap_or(trimmed);
        match digits {
            "1" => Ok(Self::P1),
            "2" => Ok(Self::P2),
            "3" => Ok(Self::P3),
            _ => Err(CoreError::InvalidPriority(raw.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriorityVisitor;

        impl Visitor<'_> for PriorityVisitor {
            type Value = Priority;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a priority tier: \"P1\", \"P2\", \"P3\", or 1-3")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Priority, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Priority, E> {
                Priority::from_tier(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Priority, E> {
                let tier = i64::try_from(v).map_err(E::custom)?;
                Priority::from_tier(tier).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}

impl JsonSchema for Priority {
    fn schema_name() -> Cow<'static, str> {
        "Priority".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Priority tier. Accepts \"P1\"-\"P3\" (any case), \"1\"-\"3\", or 1-3.",
            "anyOf": [
                { "type": "string", "pattern": "^[Pp]?[1-3]$" },
                { "type": "integer", "minimum": 1, "maximum": 3 }
            ]
        })
    }
}

// ---------------------------------------------------------------------------
// DependencyType
// ---------------------------------------------------------------------------

/// Scheduling relation between two objectives.
///
/// Carried as metadata only. The lead-time arithmetic uses the predecessor's
/// magnitude regardless of type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum DependencyType {
    /// Finish-to-start.
    #[default]
    #[serde(rename = "FS")]
    FinishToStart,
    /// Start-to-start.
    #[serde(rename = "SS")]
    StartToStart,
    /// Finish-to-finish.
    #[serde(rename = "FF")]
    FinishToFinish,
    /// Start-to-finish.
    #[serde(rename = "SF")]
    StartToFinish,
}

impl DependencyType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::StartToStart => "SS",
            Self::FinishToFinish => "FF",
            Self::StartToFinish => "SF",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RateUnit
// ---------------------------------------------------------------------------

/// Time unit of a throughput rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    Day,
    Week,
}

impl RateUnit {
    /// Number of days in one unit.
    #[must_use]
    pub const fn days(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Week => 7.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VarianceStatus
// ---------------------------------------------------------------------------

/// Schedule health of a calculated date against its target.
///
/// ```text
/// variance_days <= 0      → on_track
/// 0 < variance_days <= 5  → at_risk
/// variance_days > 5       → critical
/// ```
///
/// Evaluated fresh on every call; there are no transitions to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    OnTrack,
    AtRisk,
    Critical,
}

impl VarianceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "on_track",
            Self::AtRisk => "at_risk",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for VarianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ForecastStatus
// ---------------------------------------------------------------------------

/// How much of an objective forecast could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    /// Every input was present.
    Complete,
    /// A lead time was computed, but some input was missing or undefined.
    Partial,
    /// No lead time could be computed.
    Unavailable,
}

impl ForecastStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ForecastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn priority_normalizes_string_spellings() {
        for raw in ["P1", "p1", "1", " P1 "] {
            assert_eq!(raw.parse::<Priority>().unwrap(), Priority::P1);
        }
        assert_eq!("p3".parse::<Priority>().unwrap(), Priority::P3);
    }

    #[test]
    fn priority_rejects_unknown_tiers() {
        for raw in ["P0", "P4", "high", "", "PP1"] {
            assert!(raw.parse::<Priority>().is_err(), "{raw} should be rejected");
        }
        assert!(Priority::from_tier(0).is_err());
        assert!(Priority::from_tier(4).is_err());
    }

    #[test]
    fn priority_deserializes_numbers_and_strings() {
        let parsed: Vec<Priority> = serde_json::from_str(r#"["P2", 1, "3", "p2"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Priority::P2, Priority::P1, Priority::P3, Priority::P2]
        );
        assert!(serde_json::from_str::<Priority>("7").is_err());
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
    }

    #[test]
    fn priority_serializes_canonical_form() {
        assert_eq!(serde_json::to_string(&Priority::P2).unwrap(), "\"P2\"");
    }

    #[test]
    fn priority_orders_by_queue_position() {
        assert!(Priority::P1 < Priority::P2);
        assert!(Priority::P2 < Priority::P3);
    }

    #[test]
    fn dependency_type_uses_short_codes() {
        assert_eq!(
            serde_json::to_string(&DependencyType::StartToStart).unwrap(),
            "\"SS\""
        );
        let parsed: DependencyType = serde_json::from_str("\"SF\"").unwrap();
        assert_eq!(parsed, DependencyType::StartToFinish);
        assert_eq!(DependencyType::default(), DependencyType::FinishToStart);
    }

    #[test]
    fn variance_status_snake_case() {
        assert_eq!(
            serde_json::to_string(&VarianceStatus::AtRisk).unwrap(),
            "\"at_risk\""
        );
        assert_eq!(VarianceStatus::OnTrack.to_string(), "on_track");
    }
}
