// src/engine/mod.rs

//! Rebuild decision and execution engine.
//!
//! - [`validator`] checks requested goals against the rule store before
//!   anything runs.
//! - [`staleness`] is the pure "does this target need rebuilding" decision.
//! - [`planner`] walks the graph depth-first and drives the executor.

pub mod planner;
pub mod staleness;
pub mod validator;

pub use planner::Planner;
pub use staleness::{RebuildReason, rebuild_reason};
pub use validator::{resolve_goals, validate_targets};
