//! Greedy route construction.
//!
//! - [`build_route`] — single-pass greedy tour under any [`crate::objective::Objective`], O(n²)
//! - [`build_route_for`] — same, with a fresh objective chosen by [`crate::objective::ObjectiveKind`]
//! - [`compare_strategies`] — several objectives over one graph, run in parallel

mod batch;
mod route_builder;

pub use batch::{compare_strategies, StrategyRun};
pub use route_builder::{build_route, build_route_for};
