//! Company profit objective.

use super::{Objective, ObjectiveKind, Step};

/// Maximizes company profit: `delivery_fee - travel_cost`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyObjective;

impl Objective for CompanyObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Company
    }

    fn value(&self, step: &Step<'_>) -> f64 {
        step.to.delivery_fee() - step.travel_cost
    }
}
