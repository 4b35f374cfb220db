//! Location graph, distance matrix, and travel cost model.

mod cost_model;
mod location_graph;
mod matrix;

pub use cost_model::CostModel;
pub use location_graph::{LocationGraph, Neighbor};
pub use matrix::DistanceMatrix;
