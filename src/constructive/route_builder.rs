//! Greedy single-vehicle route construction.
//!
//! Starting from the depot, repeatedly move to the unvisited customer with
//! the highest objective score, then return to the depot. Candidates are the
//! current stop's unvisited neighbors; when there are none, every unvisited
//! customer becomes a candidate priced by direct distance, so construction
//! never strands a customer on a disconnected part of the graph.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.
//!
//! No backtracking: once a stop is committed it stays.

use tracing::{debug, info, instrument};

use crate::config::RoutingConfig;
use crate::error::{GraphDefect, Result};
use crate::graph::{CostModel, LocationGraph};
use crate::models::Route;
use crate::objective::{Objective, ObjectiveKind, Step};

/// Per-construction mutable state. Indices are stop positions in the graph.
struct RunningState {
    visited: Vec<bool>,
    current: usize,
    total: f64,
}

impl RunningState {
    fn new(depot_pos: usize, num_stops: usize) -> Self {
        let mut visited = vec![false; num_stops];
        visited[depot_pos] = true;
        Self {
            visited,
            current: depot_pos,
            total: 0.0,
        }
    }
}

struct Candidate {
    pos: usize,
    travel_cost: f64,
}

/// Builds a route with the given objective.
///
/// Returns the route (starting and ending at `depot`) and the accumulated
/// monetary total: the sum of `objective.value()` over every committed step
/// minus the cost of the return leg. A graph without customers yields
/// `[depot, depot]` with a total of `0.0`.
///
/// Ties on score resolve to the candidate seen first: adjacency order for
/// linked neighbors, load order for the complete graph and the fallback.
///
/// # Errors
///
/// - [`crate::error::RoutingError::UnknownStop`] if `depot` is not in the graph.
/// - [`crate::error::RoutingError::MalformedGraph`] if `depot` names a customer.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
/// use u_dispatch::graph::{CostModel, LocationGraph};
/// use u_dispatch::objective::CompanyObjective;
/// use u_dispatch::constructive::build_route;
///
/// let graph = LocationGraph::complete(vec![
///     Stop::depot(0, 0.0, 0.0),
///     Stop::customer(1, 3.0, 4.0, 10.0, 3.0),
///     Stop::customer(2, 8.0, 1.0, 12.0, 2.0),
/// ])
/// .unwrap();
///
/// let (route, total) =
///     build_route(&graph, 0, &mut CompanyObjective, &CostModel::default()).unwrap();
/// assert_eq!(route.stop_ids().first(), Some(&0));
/// assert_eq!(route.stop_ids().last(), Some(&0));
/// assert_eq!(route.num_customers(), 2);
/// assert!(total > 0.0);
/// ```
#[instrument(skip_all, level = "debug", fields(objective = %objective.kind(), depot = depot))]
pub fn build_route(
    graph: &LocationGraph,
    depot: usize,
    objective: &mut dyn Objective,
    cost_model: &CostModel,
) -> Result<(Route, f64)> {
    let depot_pos = graph.position(depot)?;
    if !graph.stops()[depot_pos].is_depot() {
        return Err(GraphDefect::DepotMismatch {
            requested: depot,
            depot: graph.depot().id(),
        }
        .into());
    }

    let stops = graph.stops();
    let mut state = RunningState::new(depot_pos, stops.len());
    let mut route = Route::starting_at(depot);

    while let Some(candidates) = next_candidates(graph, &state, cost_model)? {
        let from = &stops[state.current];

        let mut best: Option<(usize, Step<'_>, f64)> = None;
        for candidate in &candidates {
            let step = Step {
                from,
                to: &stops[candidate.pos],
                distance: graph.distance_between(state.current, candidate.pos),
                travel_cost: candidate.travel_cost,
            };
            let score = objective.score(&step);
            if best.as_ref().map_or(true, |(_, _, best_score)| score > *best_score) {
                best = Some((candidate.pos, step, score));
            }
        }

        let Some((pos, step, score)) = best else {
            break;
        };

        let value = objective.value(&step);
        objective.update(&step);
        state.total += value;
        state.visited[pos] = true;
        state.current = pos;
        route.push(step.to.id());

        debug!(stop = step.to.id(), score, value, total = state.total, "committed stop");
    }

    let return_cost = cost_model.travel_cost(graph.distance_between(state.current, depot_pos));
    state.total -= return_cost;
    route.push(depot);

    info!(
        customers = route.num_customers(),
        total = state.total,
        "route built"
    );
    Ok((route, state.total))
}

/// Builds a route with a fresh objective of the given kind.
///
/// The configuration is validated first and supplies both the cost rate and
/// the objective's thresholds.
pub fn build_route_for(
    graph: &LocationGraph,
    depot: usize,
    kind: ObjectiveKind,
    config: &RoutingConfig,
) -> Result<(Route, f64)> {
    config.validate()?;
    let mut objective = kind.objective(config);
    build_route(graph, depot, objective.as_mut(), &CostModel::from_config(config))
}

/// Candidates reachable from the current stop, or `None` once every
/// customer has been visited.
fn next_candidates(
    graph: &LocationGraph,
    state: &RunningState,
    cost_model: &CostModel,
) -> Result<Option<Vec<Candidate>>> {
    let stops = graph.stops();
    let current = &stops[state.current];

    let mut candidates = Vec::new();
    for neighbor in graph.neighbors(current.id())? {
        let pos = graph.position(neighbor.id)?;
        if state.visited[pos] || stops[pos].is_depot() {
            continue;
        }
        let travel_cost = neighbor.travel_cost.unwrap_or_else(|| {
            cost_model.travel_cost(graph.distance_between(state.current, pos))
        });
        candidates.push(Candidate { pos, travel_cost });
    }
    if !candidates.is_empty() {
        return Ok(Some(candidates));
    }

    let unvisited: Vec<Candidate> = stops
        .iter()
        .enumerate()
        .filter(|&(pos, stop)| !state.visited[pos] && !stop.is_depot())
        .map(|(pos, _)| Candidate {
            pos,
            travel_cost: cost_model.travel_cost(graph.distance_between(state.current, pos)),
        })
        .collect();

    if unvisited.is_empty() {
        return Ok(None);
    }
    debug!(
        from = current.id(),
        remaining = unvisited.len(),
        "no unvisited neighbor, falling back to direct distance"
    );
    Ok(Some(unvisited))
}
