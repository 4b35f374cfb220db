//! Objective functions that drive greedy next-stop selection.
//!
//! Every objective exposes the same capability: a selection `score`, a
//! monetary `value`, and an `update` hook for strategy-local memory. The
//! route builder commits the candidate with the greatest score and adds its
//! value to the running total, so ethical bonuses steer selection without
//! ever appearing in the reported total.
//!
//! - [`CompanyObjective`] — delivery fee minus travel cost
//! - [`DriverObjective`] — delivery fee plus tip minus travel cost
//! - [`FairnessObjective`] — driver earnings, alternating high/low tip tiers
//! - [`FatigueObjective`] — driver earnings, discouraging back-to-back long drives
//! - [`PriorityObjective`] — driver earnings, balancing urgent and routine deliveries

mod company;
mod driver;
mod fairness;
mod fatigue;
mod kind;
mod priority;

pub use company::CompanyObjective;
pub use driver::DriverObjective;
pub use fairness::FairnessObjective;
pub use fatigue::FatigueObjective;
pub use kind::{EthicalRule, ObjectiveKind};
pub use priority::PriorityObjective;

use crate::models::Stop;

/// One candidate move from the current stop to another.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// Where the vehicle is now.
    pub from: &'a Stop,
    /// The candidate being considered.
    pub to: &'a Stop,
    /// Euclidean distance between the two.
    pub distance: f64,
    /// Monetary cost of the leg.
    pub travel_cost: f64,
}

/// Scoring capability shared by all strategies.
///
/// Implementations hold their own per-run memory; a fresh instance must be
/// used for every route construction.
pub trait Objective: Send {
    /// Which variant this is.
    fn kind(&self) -> ObjectiveKind;

    /// Monetary value accumulated into the route total when `step` is taken.
    fn value(&self, step: &Step<'_>) -> f64;

    /// Selection score. Defaults to [`Objective::value`].
    fn score(&self, step: &Step<'_>) -> f64 {
        self.value(step)
    }

    /// Records that `step` was committed.
    fn update(&mut self, _step: &Step<'_>) {}
}
