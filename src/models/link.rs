//! Undirected travel link between two stops.

use serde::{Deserialize, Serialize};

/// A direct road between two stops.
///
/// A link may carry an explicit `travel_cost`; without one, the cost is
/// derived from the Euclidean distance between its endpoints.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::TravelLink;
///
/// let road = TravelLink::new(0, 1);
/// assert!(road.travel_cost().is_none());
///
/// let priced = TravelLink::weighted(1, 2, 4.5);
/// assert_eq!(priced.travel_cost(), Some(4.5));
/// assert_eq!(priced.other_end(2), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLink {
    #[serde(alias = "from_id")]
    from: usize,
    #[serde(alias = "to_id")]
    to: usize,
    #[serde(default)]
    travel_cost: Option<f64>,
}

impl TravelLink {
    /// Creates a link priced by distance.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            travel_cost: None,
        }
    }

    /// Creates a link with an explicit travel cost.
    pub fn weighted(from: usize, to: usize, travel_cost: f64) -> Self {
        Self {
            from,
            to,
            travel_cost: Some(travel_cost),
        }
    }

    /// One endpoint id.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The other endpoint id.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Explicit travel cost, if the link carries one.
    pub fn travel_cost(&self) -> Option<f64> {
        self.travel_cost
    }

    /// Returns the opposite endpoint if `id` is one of the two ends.
    pub fn other_end(&self, id: usize) -> Option<usize> {
        if self.from == id {
            Some(self.to)
        } else if self.to == id {
            Some(self.from)
        } else {
            None
        }
    }
}
