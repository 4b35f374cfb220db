//! Route metrics that show what each ethical rule changed.

use serde::Serialize;

use crate::config::RoutingConfig;
use crate::error::Result;
use crate::graph::LocationGraph;
use crate::models::{Route, TipTier};

/// Fairness, fatigue, and priority metrics of a single route.
///
/// Tip and priority metrics look only at customer visits. Drive metrics look
/// at every leg, including the legs out of and back into the depot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    /// Customers at or above the high-tip threshold.
    pub high_tip_served: usize,
    /// Customers below the high-tip threshold.
    pub low_tip_served: usize,
    /// Number of times consecutive customers switch tip tier.
    pub tip_alternations: usize,
    /// Legs at or above the long-drive threshold.
    pub long_drives: usize,
    /// Longest run of consecutive long legs.
    pub max_consecutive_long_drives: usize,
    pub urgent_served: usize,
    pub routine_served: usize,
    /// Mean 0-based position of urgent stops among customers.
    pub average_urgent_position: Option<f64>,
}

impl ImpactReport {
    /// Computes the report for `route` over `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_dispatch::config::RoutingConfig;
    /// use u_dispatch::evaluation::ImpactReport;
    /// use u_dispatch::graph::LocationGraph;
    /// use u_dispatch::models::{Route, Stop};
    ///
    /// let graph = LocationGraph::complete(vec![
    ///     Stop::depot(0, 0.0, 0.0),
    ///     Stop::customer(1, 20.0, 0.0, 5.0, 4.0).with_priority(1),
    ///     Stop::customer(2, 40.0, 0.0, 5.0, 1.0),
    /// ])
    /// .unwrap();
    /// let route = Route::from_ids(0, vec![0, 1, 2, 0]);
    /// let report = ImpactReport::analyze(&graph, &route, &RoutingConfig::default()).unwrap();
    ///
    /// assert_eq!(report.tip_alternations, 1);
    /// assert_eq!(report.long_drives, 3);
    /// assert_eq!(report.max_consecutive_long_drives, 3);
    /// assert_eq!(report.average_urgent_position, Some(0.0));
    /// ```
    pub fn analyze(graph: &LocationGraph, route: &Route, config: &RoutingConfig) -> Result<Self> {
        let mut customers = Vec::with_capacity(route.len());
        for &id in route.stop_ids() {
            let stop = graph.stop(id)?;
            if !stop.is_depot() {
                customers.push(stop);
            }
        }

        let tiers: Vec<TipTier> = customers
            .iter()
            .map(|s| s.tip_tier(config.high_tip_threshold))
            .collect();
        let high_tip_served = tiers.iter().filter(|&&t| t == TipTier::High).count();
        let tip_alternations = tiers.windows(2).filter(|w| w[0] != w[1]).count();

        let mut long_drives = 0;
        let mut max_consecutive_long_drives = 0;
        let mut run = 0;
        for (from, to) in route.legs() {
            if graph.distance(from, to)? >= config.long_drive_threshold {
                long_drives += 1;
                run += 1;
                max_consecutive_long_drives = max_consecutive_long_drives.max(run);
            } else {
                run = 0;
            }
        }

        let urgent_positions: Vec<usize> = customers
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_urgent())
            .map(|(i, _)| i)
            .collect();
        let average_urgent_position = if urgent_positions.is_empty() {
            None
        } else {
            Some(urgent_positions.iter().sum::<usize>() as f64 / urgent_positions.len() as f64)
        };

        Ok(Self {
            high_tip_served,
            low_tip_served: customers.len() - high_tip_served,
            tip_alternations,
            long_drives,
            max_consecutive_long_drives,
            urgent_served: urgent_positions.len(),
            routine_served: customers.len() - urgent_positions.len(),
            average_urgent_position,
        })
    }
}
