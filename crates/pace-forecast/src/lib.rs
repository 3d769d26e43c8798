//! # pace-forecast
//!
//! Lead-time forecasting and capacity rollup engine for Pace.
//!
//! Data flows one way:
//!
//! ```text
//! completion history → throughput → item forecasts → objective lead times
//!                                                  → project rollup → variance
//! ```
//!
//! Every function is synchronous and pure over already-fetched inputs. A
//! single [`ForecastContext`] carries the "now" anchor for one request.
//!
//! - [`throughput`]: bucketed and windowed rates
//! - [`queue`]: priority-queue position, item forecasts, team load
//! - [`critical_path`]: max-aggregation of parallel work
//! - [`lead_time`]: one objective/team pairing, and team aggregation
//! - [`rollup`]: objective tree to project forecast
//! - [`variance`]: on-track / at-risk / critical classification
//! - [`ForecastService`]: request/response facade over the stores

pub mod context;
pub mod critical_path;
pub mod error;
pub mod lead_time;
mod numeric;
pub mod org_tree;
pub mod queue;
pub mod rollup;
pub mod service;
pub mod throughput;
pub mod variance;

pub use context::{ForecastContext, ForecastSettings};
pub use error::ForecastError;
pub use numeric::{ceil_days, round_to};
pub use service::ForecastService;
pub use throughput::ThroughputWindow;
