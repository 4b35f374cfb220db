//! Linear distance-to-money conversion.

use crate::config::RoutingConfig;

/// Converts a physical distance into a monetary travel cost.
///
/// # Examples
///
/// ```
/// use u_dispatch::graph::CostModel;
///
/// let model = CostModel::default();
/// assert!((model.travel_cost(10.0) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    rate: f64,
}

impl CostModel {
    /// Default cost per unit of distance.
    pub const DEFAULT_RATE: f64 = 0.50;

    /// Cost model charging `rate` per unit of distance.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Cost model using the configured rate.
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.cost_rate)
    }

    /// Cost per unit of distance.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// `distance * rate`.
    pub fn travel_cost(&self, distance: f64) -> f64 {
        distance * self.rate
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}
