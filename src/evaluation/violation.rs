//! Structural route violations.

/// A way in which a route fails to be a complete depot-to-depot tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// The first entry is not the depot.
    MissingStartDepot {
        /// What the route starts with, if anything.
        found: Option<usize>,
    },
    /// The last entry is not the depot (or the route is too short to return).
    MissingEndDepot {
        /// What the route ends with, if anything.
        found: Option<usize>,
    },
    /// The depot appears between the start and the end.
    DepotMidRoute {
        /// Index into the route's id sequence.
        position: usize,
    },
    /// The route references a stop that is not in the graph.
    UnknownStop {
        /// Offending stop id.
        stop_id: usize,
    },
    /// A customer is visited more than once.
    RepeatedCustomer {
        /// Customer visited again.
        customer_id: usize,
    },
    /// A customer is never visited.
    MissingCustomer {
        /// Customer left out.
        customer_id: usize,
    },
}

/// A structural violation in a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}
