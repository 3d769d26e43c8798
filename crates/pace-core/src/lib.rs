//! # pace-core
//!
//! Core types, store contracts, and error types for Pace.
//!
//! This crate provides the foundational types shared across all Pace crates:
//! - Input entities (backlog items, completion history, org units, objectives, projects)
//! - Closed enums for priority tiers, dependency types, and forecast states
//! - Derived response types produced by the forecasting engine
//! - Read-only store traits describing the external collaborators
//! - An in-memory [`snapshot::Snapshot`] implementing every store
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod snapshot;
pub mod stores;
