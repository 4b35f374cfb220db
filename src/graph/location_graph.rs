//! Stops plus the symmetric travel relation between them.

use std::collections::HashMap;

use tracing::warn;

use super::DistanceMatrix;
use crate::error::{GraphDefect, Result, RoutingError};
use crate::models::{Stop, TravelLink};

/// A stop adjacent to some other stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Id of the adjacent stop.
    pub id: usize,
    /// Explicit link cost, or `None` when the leg is priced by distance.
    pub travel_cost: Option<f64>,
}

#[derive(Debug, Clone)]
enum Adjacency {
    /// Every pair of stops is directly connected.
    Complete,
    /// Per-position neighbor lists in link insertion order.
    Explicit(Vec<Vec<Neighbor>>),
}

/// The set of stops (exactly one depot) and the links between them.
///
/// Built either as a complete graph, where every pair of stops is adjacent
/// and priced by distance, or from an explicit list of undirected links.
/// The graph is read-only after construction.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Stop, TravelLink};
/// use u_dispatch::graph::LocationGraph;
///
/// let stops = vec![
///     Stop::depot(0, 0.0, 0.0),
///     Stop::customer(1, 3.0, 4.0, 10.0, 3.0),
///     Stop::customer(2, 8.0, 1.0, 12.0, 2.0),
/// ];
/// let graph = LocationGraph::with_links(stops, vec![TravelLink::new(0, 1)]).unwrap();
/// assert_eq!(graph.depot().id(), 0);
/// assert_eq!(graph.num_customers(), 2);
/// assert_eq!(graph.neighbors(0).unwrap().len(), 1);
/// assert!(graph.neighbors(2).unwrap().is_empty());
/// assert!(graph.neighbors(9).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LocationGraph {
    stops: Vec<Stop>,
    positions: HashMap<usize, usize>,
    depot: usize,
    distances: DistanceMatrix,
    adjacency: Adjacency,
}

impl LocationGraph {
    /// Builds a graph in which every stop is adjacent to every other.
    pub fn complete(stops: Vec<Stop>) -> Result<Self> {
        Self::build(stops, Adjacency::Complete)
    }

    /// Builds a graph with adjacency given by undirected `links`.
    ///
    /// Duplicate links (in either direction) and self-loops are ignored;
    /// the first occurrence of a pair wins.
    pub fn with_links(stops: Vec<Stop>, links: Vec<TravelLink>) -> Result<Self> {
        let mut graph = Self::build(stops, Adjacency::Explicit(Vec::new()))?;
        let mut lists: Vec<Vec<Neighbor>> = vec![Vec::new(); graph.stops.len()];

        for link in &links {
            let a = graph.position(link.from())?;
            let b = graph.position(link.to())?;
            if let Some(cost) = link.travel_cost() {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(GraphDefect::InvalidTravelCost {
                        from: link.from(),
                        to: link.to(),
                    }
                    .into());
                }
            }
            if a == b {
                warn!(stop = link.from(), "ignoring self-loop travel link");
                continue;
            }
            if lists[a].iter().any(|n| n.id == link.to()) {
                warn!(
                    from = link.from(),
                    to = link.to(),
                    "ignoring duplicate travel link"
                );
                continue;
            }
            lists[a].push(Neighbor {
                id: link.to(),
                travel_cost: link.travel_cost(),
            });
            lists[b].push(Neighbor {
                id: link.from(),
                travel_cost: link.travel_cost(),
            });
        }

        graph.adjacency = Adjacency::Explicit(lists);
        Ok(graph)
    }

    fn build(stops: Vec<Stop>, adjacency: Adjacency) -> Result<Self> {
        let mut positions = HashMap::with_capacity(stops.len());
        let mut depots = Vec::new();

        for (pos, stop) in stops.iter().enumerate() {
            if positions.insert(stop.id(), pos).is_some() {
                return Err(GraphDefect::DuplicateStop { id: stop.id() }.into());
            }
            if !stop.has_finite_position() {
                return Err(GraphDefect::NonFiniteCoordinate { id: stop.id() }.into());
            }
            if !stop.has_finite_amounts() {
                return Err(GraphDefect::NonFiniteAmount { id: stop.id() }.into());
            }
            if stop.is_depot() {
                depots.push(pos);
            }
        }

        let depot = match depots.as_slice() {
            [] => return Err(GraphDefect::NoDepot.into()),
            [only] => *only,
            many => {
                let ids = many.iter().map(|&p| stops[p].id()).collect();
                return Err(GraphDefect::MultipleDepots { ids }.into());
            }
        };

        let distances = DistanceMatrix::from_stops(&stops);
        Ok(Self {
            stops,
            positions,
            depot,
            distances,
            adjacency,
        })
    }

    /// The depot stop.
    pub fn depot(&self) -> &Stop {
        &self.stops[self.depot]
    }

    /// All stops in load order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Customer stops in load order.
    pub fn customers(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(|s| !s.is_depot())
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.stops.len() - 1
    }

    /// `true` when the graph was built from explicit links.
    pub fn has_explicit_links(&self) -> bool {
        matches!(self.adjacency, Adjacency::Explicit(_))
    }

    pub fn contains(&self, id: usize) -> bool {
        self.positions.contains_key(&id)
    }

    /// Looks up a stop by id.
    pub fn stop(&self, id: usize) -> Result<&Stop> {
        Ok(&self.stops[self.position(id)?])
    }

    /// Stops directly linked to `id`.
    ///
    /// In a complete graph this is every other stop, in load order.
    pub fn neighbors(&self, id: usize) -> Result<Vec<Neighbor>> {
        let pos = self.position(id)?;
        let neighbors = match &self.adjacency {
            Adjacency::Complete => self
                .stops
                .iter()
                .enumerate()
                .filter(|&(p, _)| p != pos)
                .map(|(_, s)| Neighbor {
                    id: s.id(),
                    travel_cost: None,
                })
                .collect(),
            Adjacency::Explicit(lists) => lists[pos].clone(),
        };
        Ok(neighbors)
    }

    /// Direct link between two stops, if they are adjacent.
    pub fn link(&self, from: usize, to: usize) -> Result<Option<Neighbor>> {
        let a = self.position(from)?;
        let b = self.position(to)?;
        let found = match &self.adjacency {
            Adjacency::Complete => (a != b).then_some(Neighbor {
                id: to,
                travel_cost: None,
            }),
            Adjacency::Explicit(lists) => lists[a].iter().find(|n| n.id == to).copied(),
        };
        Ok(found)
    }

    /// Euclidean distance between two stops.
    pub fn distance(&self, from: usize, to: usize) -> Result<f64> {
        Ok(self.distances.get(self.position(from)?, self.position(to)?))
    }

    pub(crate) fn distance_between(&self, from_pos: usize, to_pos: usize) -> f64 {
        self.distances.get(from_pos, to_pos)
    }

    pub(crate) fn position(&self, id: usize) -> Result<usize> {
        self.positions
            .get(&id)
            .copied()
            .ok_or(RoutingError::UnknownStop { id })
    }
}
