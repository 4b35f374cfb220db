//! # u-dispatch
//!
//! Greedy single-vehicle delivery routing. One route-construction loop is
//! parameterized by an objective: company profit, driver earnings, or driver
//! earnings with an ethical modifier (tip fairness, fatigue, priority).
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, TravelLink, Route)
//! - [`graph`] — Location graph, distance matrix, and travel cost model
//! - [`objective`] — Objective trait and the five scoring variants
//! - [`constructive`] — Greedy route builder and parallel strategy comparison
//! - [`evaluation`] — Route well-formedness, value re-tracing, impact metrics
//! - [`config`] — Cost rate and ethical thresholds
//! - [`error`] — Error taxonomy

pub mod config;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod models;
pub mod objective;
