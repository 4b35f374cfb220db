//! Driver earnings objective.

use super::{Objective, ObjectiveKind, Step};

/// Maximizes driver take-home: `delivery_fee + estimated_tip - travel_cost`.
///
/// The ethical objectives reuse this as their monetary value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverObjective;

impl DriverObjective {
    /// Driver earnings for a step.
    pub fn earnings(step: &Step<'_>) -> f64 {
        step.to.delivery_fee() + step.to.estimated_tip() - step.travel_cost
    }
}

impl Objective for DriverObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Driver
    }

    fn value(&self, step: &Step<'_>) -> f64 {
        Self::earnings(step)
    }
}
