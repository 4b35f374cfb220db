//! Domain model types for greedy delivery routing.
//!
//! Stops (one depot plus customers) with fees, tips, and priorities, the
//! travel links that connect them, and the routes built over them.

mod link;
mod route;
mod stop;

pub use link::TravelLink;
pub use route::Route;
pub use stop::{Region, Stop, TipTier};
