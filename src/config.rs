//! Tunable parameters for cost and the ethical objectives.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Configuration block for route construction.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::RoutingConfig;
///
/// let config = RoutingConfig::from_json(r#"{ "cost_rate": 0.75 }"#).unwrap();
/// assert_eq!(config.cost_rate, 0.75);
/// assert_eq!(config.high_tip_threshold, 3.0);
///
/// let config = RoutingConfig::default().with_long_drive_threshold(20.0);
/// assert_eq!(config.long_drive_threshold, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Monetary cost per unit of distance traveled.
    pub cost_rate: f64,
    /// Tips at or above this amount are "high".
    pub high_tip_threshold: f64,
    /// Legs at or above this distance are "long".
    pub long_drive_threshold: f64,
    /// Consecutive high-tip serves before fairness prefers low-tip stops.
    pub fairness_flip_high_run: u32,
    /// Consecutive low-tip serves before fairness prefers high-tip stops again.
    pub fairness_flip_low_run: u32,
    /// Target urgent deliveries per routine delivery.
    pub priority_ratio: u32,
    /// Urgent serves (with no routine serve yet) that trigger the starvation guard.
    pub priority_starvation_run: u32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            cost_rate: 0.50,
            high_tip_threshold: 3.00,
            long_drive_threshold: 15.0,
            fairness_flip_high_run: 2,
            fairness_flip_low_run: 1,
            priority_ratio: 2,
            priority_starvation_run: 3,
        }
    }
}

impl RoutingConfig {
    /// Parses a JSON configuration block and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the per-distance cost rate.
    pub fn with_cost_rate(mut self, rate: f64) -> Self {
        self.cost_rate = rate;
        self
    }

    /// Sets the high-tip threshold.
    pub fn with_high_tip_threshold(mut self, threshold: f64) -> Self {
        self.high_tip_threshold = threshold;
        self
    }

    /// Sets the long-drive distance threshold.
    pub fn with_long_drive_threshold(mut self, threshold: f64) -> Self {
        self.long_drive_threshold = threshold;
        self
    }

    /// Sets the fairness flip run lengths (high run, low run).
    pub fn with_fairness_runs(mut self, high_run: u32, low_run: u32) -> Self {
        self.fairness_flip_high_run = high_run;
        self.fairness_flip_low_run = low_run;
        self
    }

    /// Sets the priority ratio and starvation run.
    pub fn with_priority_balance(mut self, ratio: u32, starvation_run: u32) -> Self {
        self.priority_ratio = ratio;
        self.priority_starvation_run = starvation_run;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("cost_rate", self.cost_rate)?;
        check_non_negative("high_tip_threshold", self.high_tip_threshold)?;
        check_non_negative("long_drive_threshold", self.long_drive_threshold)?;
        check_positive("fairness_flip_high_run", self.fairness_flip_high_run)?;
        check_positive("fairness_flip_low_run", self.fairness_flip_low_run)?;
        check_positive("priority_starvation_run", self.priority_starvation_run)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RoutingError::InvalidConfig {
            field,
            reason: format!("expected a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(RoutingError::InvalidConfig {
            field,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
