//! Route evaluator: structural checks and monetary re-tracing.

use std::collections::HashSet;

use super::{Violation, ViolationType};
use crate::config::RoutingConfig;
use crate::error::Result;
use crate::graph::{CostModel, LocationGraph};
use crate::models::Route;
use crate::objective::{ObjectiveKind, Step};

/// Checks that routes are complete tours and recomputes their totals.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::RoutingConfig;
/// use u_dispatch::constructive::build_route_for;
/// use u_dispatch::evaluation::RouteEvaluator;
/// use u_dispatch::graph::LocationGraph;
/// use u_dispatch::models::{Route, Stop};
/// use u_dispatch::objective::ObjectiveKind;
///
/// let graph = LocationGraph::complete(vec![
///     Stop::depot(0, 0.0, 0.0),
///     Stop::customer(1, 3.0, 4.0, 10.0, 3.0),
///     Stop::customer(2, 8.0, 1.0, 12.0, 2.0),
/// ])
/// .unwrap();
/// let config = RoutingConfig::default();
/// let evaluator = RouteEvaluator::new(&graph, &config);
///
/// let (route, total) = build_route_for(&graph, 0, ObjectiveKind::Fairness, &config).unwrap();
/// assert!(evaluator.is_well_formed(&route));
///
/// let driver_total = evaluator.retrace_value(&route, ObjectiveKind::Driver).unwrap();
/// assert!((driver_total - total).abs() < 1e-9);
///
/// assert!(!evaluator.is_well_formed(&Route::from_ids(0, vec![0, 1, 0])));
/// ```
pub struct RouteEvaluator<'a> {
    graph: &'a LocationGraph,
    config: &'a RoutingConfig,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given graph and configuration.
    pub fn new(graph: &'a LocationGraph, config: &'a RoutingConfig) -> Self {
        Self { graph, config }
    }

    /// Lists every structural violation of `route`.
    ///
    /// A well-formed route starts and ends at the depot, never passes the
    /// depot in between, and visits each customer exactly once.
    pub fn violations(&self, route: &Route) -> Vec<Violation> {
        let depot = self.graph.depot().id();
        let ids = route.stop_ids();
        let mut violations = Vec::new();

        match ids.first() {
            Some(&first) if first == depot => {}
            found => violations.push(Violation::new(ViolationType::MissingStartDepot {
                found: found.copied(),
            })),
        }
        if ids.len() < 2 || ids.last() != Some(&depot) {
            violations.push(Violation::new(ViolationType::MissingEndDepot {
                found: ids.last().copied(),
            }));
        }

        let inner = if ids.len() > 2 { &ids[1..ids.len() - 1] } else { &[][..] };
        let mut seen = HashSet::new();
        for (offset, &id) in inner.iter().enumerate() {
            if id == depot {
                violations.push(Violation::new(ViolationType::DepotMidRoute {
                    position: offset + 1,
                }));
            } else if !self.graph.contains(id) {
                violations.push(Violation::new(ViolationType::UnknownStop { stop_id: id }));
            } else if !seen.insert(id) {
                violations.push(Violation::new(ViolationType::RepeatedCustomer {
                    customer_id: id,
                }));
            }
        }

        for customer in self.graph.customers() {
            if !seen.contains(&customer.id()) {
                violations.push(Violation::new(ViolationType::MissingCustomer {
                    customer_id: customer.id(),
                }));
            }
        }

        violations
    }

    /// `true` if [`RouteEvaluator::violations`] finds nothing.
    pub fn is_well_formed(&self, route: &Route) -> bool {
        self.violations(route).is_empty()
    }

    /// Recomputes the monetary total of a route under `kind`'s `value()`.
    ///
    /// Legs into a customer add the objective value, priced with the
    /// explicit link cost when one exists and by distance otherwise. Legs
    /// into the depot subtract the distance-priced return cost. Selection
    /// bonuses play no part.
    pub fn retrace_value(&self, route: &Route, kind: ObjectiveKind) -> Result<f64> {
        let objective = kind.objective(self.config);
        let cost_model = CostModel::from_config(self.config);
        let mut total = 0.0;

        for (from_id, to_id) in route.legs() {
            let from = self.graph.stop(from_id)?;
            let to = self.graph.stop(to_id)?;
            let distance = self.graph.distance(from_id, to_id)?;

            if to.is_depot() {
                total -= cost_model.travel_cost(distance);
                continue;
            }

            let travel_cost = self
                .graph
                .link(from_id, to_id)?
                .and_then(|link| link.travel_cost)
                .unwrap_or_else(|| cost_model.travel_cost(distance));
            let step = Step {
                from,
                to,
                distance,
                travel_cost,
            };
            total += objective.value(&step);
        }

        Ok(total)
    }
}
