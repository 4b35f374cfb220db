//! Tip-tier fairness: alternate between high-tip and low-tip customers.
//!
//! The objective starts out preferring high-tip stops. After
//! `fairness_flip_high_run` consecutive high-tip serves it switches to
//! preferring low-tip stops, and after `fairness_flip_low_run` consecutive
//! low-tip serves it switches back.

use super::{DriverObjective, Objective, ObjectiveKind, Step};
use crate::config::RoutingConfig;
use crate::models::TipTier;

/// Bonus for a high-tip candidate while high-tip stops are preferred.
pub const HIGH_TIP_BONUS: f64 = 2.0;

/// Bonus for a low-tip candidate while low-tip stops are preferred.
pub const LOW_TIP_BONUS: f64 = 3.0;

/// Driver earnings plus an alternating tip-tier bonus.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::RoutingConfig;
/// use u_dispatch::models::TipTier;
/// use u_dispatch::objective::FairnessObjective;
///
/// let obj = FairnessObjective::new(&RoutingConfig::default());
/// assert_eq!(obj.preferred_tier(), TipTier::High);
/// ```
#[derive(Debug, Clone)]
pub struct FairnessObjective {
    high_tip_threshold: f64,
    flip_high_run: u32,
    flip_low_run: u32,
    preferred: TipTier,
    high_run: u32,
    low_run: u32,
}

impl FairnessObjective {
    /// Fresh objective preferring high-tip stops, with thresholds from `config`.
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            high_tip_threshold: config.high_tip_threshold,
            flip_high_run: config.fairness_flip_high_run,
            flip_low_run: config.fairness_flip_low_run,
            preferred: TipTier::High,
            high_run: 0,
            low_run: 0,
        }
    }

    /// The tier currently receiving the bonus.
    pub fn preferred_tier(&self) -> TipTier {
        self.preferred
    }

    fn bonus(&self, tier: TipTier) -> f64 {
        match (self.preferred, tier) {
            (TipTier::High, TipTier::High) => HIGH_TIP_BONUS,
            (TipTier::Low, TipTier::Low) => LOW_TIP_BONUS,
            _ => 0.0,
        }
    }
}

impl Objective for FairnessObjective {
    fn kind(&self) -> ObjectiveKind {
        ObjectiveKind::Fairness
    }

    fn value(&self, step: &Step<'_>) -> f64 {
        DriverObjective::earnings(step)
    }

    fn score(&self, step: &Step<'_>) -> f64 {
        self.value(step) + self.bonus(step.to.tip_tier(self.high_tip_threshold))
    }

    fn update(&mut self, step: &Step<'_>) {
        match step.to.tip_tier(self.high_tip_threshold) {
            TipTier::High => {
                self.high_run += 1;
                self.low_run = 0;
                if self.high_run >= self.flip_high_run {
                    self.preferred = TipTier::Low;
                }
            }
            TipTier::Low => {
                self.low_run += 1;
                self.high_run = 0;
                if self.low_run >= self.flip_low_run {
                    self.preferred = TipTier::High;
                }
            }
        }
    }
}
