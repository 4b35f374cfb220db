//! Urgent/routine balance with a starvation guard for routine deliveries.

use super::{DriverObjective, Objective, ObjectiveKind, Step};
use crate::config::RoutingConfig;

/// Bonus for a routine candidate once routine deliveries are being starved.
pub const STARVATION_BONUS: f64 = 6.0;

/// Bonus for an urgent candidate while below the urgent/routine ratio.
pub const RATIO_BONUS: f64 = 2.0;

/// Driver earnings biased toward an urgent-to-routine serving ratio.
///
/// The starvation guard takes precedence: while it is active the ratio bonus
/// is not considered.
#[derive(Debug, Clone)]
pub struct PriorityObjective {
    ratio: u32,
    starvation_run: u32,
    urgent_served: u32,
    routine_served: u32,
}

impl PriorityObjective {
    /// Fresh objective with nothing served yet.
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            ratio: config.priority_ratio,
            starvation_run: config.priority_starvation_run,
            urgent_served: 0,
            routine_served: 0,
        }
    }

    /// `(urgent_served, routine_served)` so far.
    pub fn served(&self) -> (u32, u32) {
        (self.urgent_served, self.routine_served)
    }

    fn starving_routine(&self) -> bool {
        self.urgent_served >= self.starvation_run && self.routine_served == 0
    }

    fn below_ratio(&self) -> bool {
        self.urgent_served < self.ratio.saturating_mul(self.routine_served)
    }
}

impl Objective for PriorityObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Priority
    }

    fn value(&self, step: &Step<'_>) -> f64 {
        DriverObjective::earnings(step)
    }

    fn score(&self, step: &Step<'_>) -> f64 {
        let urgent = step.to.is_urgent();
        let bonus = if self.starving_routine() && !urgent {
            STARVATION_BONUS
        } else if self.below_ratio() && urgent {
            RATIO_BONUS
        } else {
            0.0
        };
        self.value(step) + bonus
    }

    fn update(&mut self, step: &Step<'_>) {
        if step.to.is_urgent() {
            self.urgent_served += 1;
        } else {
            self.routine_served += 1;
        }
    }
}
