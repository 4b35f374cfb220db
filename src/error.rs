//! Error types shared by graph construction, configuration, and route building.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

/// A structural problem with a stop/link set, detected at load time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphDefect {
    #[error("no depot among the loaded stops")]
    NoDepot,

    #[error("multiple depots: {ids:?}")]
    MultipleDepots { ids: Vec<usize> },

    #[error("stop {id} is defined more than once")]
    DuplicateStop { id: usize },

    #[error("stop {id} has a non-finite coordinate")]
    NonFiniteCoordinate { id: usize },

    #[error("stop {id} has a non-finite delivery fee or tip")]
    NonFiniteAmount { id: usize },

    #[error("travel link {from} <-> {to} has a negative or non-finite cost")]
    InvalidTravelCost { from: usize, to: usize },

    #[error("stop {requested} is not the depot (depot is {depot})")]
    DepotMismatch { requested: usize, depot: usize },
}

/// Errors surfaced by the routing core.
///
/// Every variant is fatal to the call that produced it. Route construction is
/// deterministic, so retrying with the same input fails the same way.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("unknown stop id {id}")]
    UnknownStop { id: usize },

    #[error("unsupported objective '{name}' (expected company, driver, fairness, fatigue or priority)")]
    UnsupportedObjective { name: String },

    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] GraphDefect),

    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
