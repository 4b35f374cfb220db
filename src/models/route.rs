//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of stop ids driven by a single vehicle.
///
/// A finished route starts and ends at the depot and visits every customer
/// exactly once; [`crate::evaluation::RouteEvaluator`] checks this.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Route;
///
/// let mut route = Route::starting_at(0);
/// route.push(2);
/// route.push(1);
/// route.push(0);
/// assert_eq!(route.stop_ids(), &[0, 2, 1, 0]);
/// assert_eq!(route.customer_ids(), vec![2, 1]);
/// assert_eq!(route.num_customers(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    depot_id: usize,
    stops: Vec<usize>,
}

impl Route {
    /// Creates a route containing only its starting depot.
    pub fn starting_at(depot_id: usize) -> Self {
        Self {
            depot_id,
            stops: vec![depot_id],
        }
    }

    /// Creates a route from a full id sequence (including depot visits).
    pub fn from_ids(depot_id: usize, stops: Vec<usize>) -> Self {
        Self { depot_id, stops }
    }

    /// Appends a stop.
    pub fn push(&mut self, stop_id: usize) {
        self.stops.push(stop_id);
    }

    /// Depot id this route belongs to.
    pub fn depot_id(&self) -> usize {
        self.depot_id
    }

    /// The full id sequence including depot visits.
    pub fn stop_ids(&self) -> &[usize] {
        &self.stops
    }

    /// Customer ids in visit order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.stops
            .iter()
            .copied()
            .filter(|&id| id != self.depot_id)
            .collect()
    }

    /// Number of customer visits.
    pub fn num_customers(&self) -> usize {
        self.stops.iter().filter(|&&id| id != self.depot_id).count()
    }

    /// Number of entries including depot visits.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consecutive (from, to) pairs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Last stop, if any.
    pub fn last(&self) -> Option<usize> {
        self.stops.last().copied()
    }
}
