//! Route checking, value re-tracing, and ethical impact metrics.

mod evaluator;
mod impact;
mod violation;

pub use evaluator::RouteEvaluator;
pub use impact::ImpactReport;
pub use violation::{Violation, ViolationType};
