//! Runs several objectives over the same graph in parallel.

use rayon::prelude::*;
use serde::Serialize;

use super::build_route_for;
use crate::config::RoutingConfig;
use crate::error::Result;
use crate::graph::LocationGraph;
use crate::models::Route;
use crate::objective::ObjectiveKind;

/// The outcome of one objective on one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyRun {
    pub kind: ObjectiveKind,
    pub route: Route,
    pub total_value: f64,
}

impl StrategyRun {
    /// `self.total_value - baseline.total_value`.
    pub fn difference_from(&self, baseline: &StrategyRun) -> f64 {
        self.total_value - baseline.total_value
    }
}

/// Builds one route per objective kind, in parallel.
///
/// Each run owns a fresh objective and its own running state; the graph is
/// shared read-only. Results come back in the order of `kinds`. The first
/// failing run aborts the comparison.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::RoutingConfig;
/// use u_dispatch::constructive::compare_strategies;
/// use u_dispatch::graph::LocationGraph;
/// use u_dispatch::models::Stop;
/// use u_dispatch::objective::ObjectiveKind;
///
/// let graph = LocationGraph::complete(vec![
///     Stop::depot(0, 0.0, 0.0),
///     Stop::customer(1, 3.0, 4.0, 10.0, 3.0),
///     Stop::customer(2, 8.0, 1.0, 12.0, 2.0),
/// ])
/// .unwrap();
///
/// let runs = compare_strategies(&graph, 0, &ObjectiveKind::ALL, &RoutingConfig::default()).unwrap();
/// assert_eq!(runs.len(), 5);
/// assert_eq!(runs[0].kind, ObjectiveKind::Company);
/// assert!(runs[1].total_value >= runs[0].total_value);
/// ```
pub fn compare_strategies(
    graph: &LocationGraph,
    depot: usize,
    kinds: &[ObjectiveKind],
    config: &RoutingConfig,
) -> Result<Vec<StrategyRun>> {
    config.validate()?;
    kinds
        .par_iter()
        .map(|&kind| {
            build_route_for(graph, depot, kind, config).map(|(route, total_value)| StrategyRun {
                kind,
                route,
                total_value,
            })
        })
        .collect()
}
