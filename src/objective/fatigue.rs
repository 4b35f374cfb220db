//! Driver fatigue: discourage consecutive long drives.

use super::{DriverObjective, Objective, ObjectiveKind, Step};
use crate::config::RoutingConfig;

/// Applied when the previous leg and the candidate leg are both long.
pub const CONSECUTIVE_LONG_PENALTY: f64 = -10.0;

/// Applied when a short leg follows a long one.
pub const REST_DRIVE_REWARD: f64 = 3.0;

/// Driver earnings with a penalty for back-to-back long legs.
#[derive(Debug, Clone)]
pub struct FatigueObjective {
    long_drive_threshold: f64,
    last_drive_long: bool,
}

impl FatigueObjective {
    /// Fresh objective with no drive history.
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            long_drive_threshold: config.long_drive_threshold,
            last_drive_long: false,
        }
    }

    /// Whether the last committed leg was long.
    pub fn last_drive_long(&self) -> bool {
        self.last_drive_long
    }

    fn is_long(&self, distance: f64) -> bool {
        distance >= self.long_drive_threshold
    }
}

impl Objective for FatigueObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Fatigue
    }

    fn value(&self, step: &Step<'_>) -> f64 {
        DriverObjective::earnings(step)
    }

    fn score(&self, step: &Step<'_>) -> f64 {
        let modifier = match (self.last_drive_long, self.is_long(step.distance)) {
            (true, true) => CONSECUTIVE_LONG_PENALTY,
            (true, false) => REST_DRIVE_REWARD,
            (false, _) => 0.0,
        };
        self.value(step) + modifier
    }

    fn update(&mut self, step: &Step<'_>) {
        self.last_drive_long = self.is_long(step.distance);
    }
}
