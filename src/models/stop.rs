//! Stop (depot or customer) and its classification helpers.

use serde::{Deserialize, Serialize};

/// Region tag of a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Downtown,
    #[default]
    Suburban,
    Rural,
}

/// Tip tier of a customer relative to a high-tip threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipTier {
    High,
    Low,
}

/// A delivery location: either the depot or a customer.
///
/// Stops are immutable once loaded. Priority is ordinal with lower values
/// being more urgent; stops with priority at most [`Stop::URGENT_MAX_PRIORITY`]
/// count as urgent, all others as routine.
///
/// Coordinates default to the origin when a loader row omits them (the
/// `id,name,delivery_fee,tip_estimate` destinations shape). On a graph of such
/// stops every distance is zero, so fallback steps, unpriced links and the
/// return leg all cost nothing; only explicit link costs are charged.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Stop, TipTier};
///
/// let depot = Stop::depot(0, 0.0, 0.0);
/// assert!(depot.is_depot());
///
/// let a = Stop::customer(1, 3.0, 4.0, 10.0, 3.0).with_priority(1);
/// assert!((depot.distance_to(&a) - 5.0).abs() < 1e-10);
/// assert_eq!(a.tip_tier(3.0), TipTier::High);
/// assert!(a.is_urgent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: usize,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    delivery_fee: f64,
    #[serde(default, alias = "tip_estimate")]
    estimated_tip: f64,
    #[serde(default = "default_priority")]
    priority: u8,
    #[serde(default)]
    region: Region,
    #[serde(default)]
    is_depot: bool,
}

fn default_priority() -> u8 {
    Stop::DEFAULT_PRIORITY
}

impl Stop {
    /// Priority assigned when none is given.
    pub const DEFAULT_PRIORITY: u8 = 3;

    /// Highest priority value still considered urgent.
    pub const URGENT_MAX_PRIORITY: u8 = 2;

    /// Creates a customer stop with default priority and region.
    pub fn customer(id: usize, x: f64, y: f64, delivery_fee: f64, estimated_tip: f64) -> Self {
        Self {
            id,
            name: None,
            x,
            y,
            delivery_fee,
            estimated_tip,
            priority: Self::DEFAULT_PRIORITY,
            region: Region::default(),
            is_depot: false,
        }
    }

    /// Creates the depot at the given coordinates (no fee, no tip).
    pub fn depot(id: usize, x: f64, y: f64) -> Self {
        Self {
            is_depot: true,
            ..Self::customer(id, x, y, 0.0, 0.0)
        }
    }

    /// Sets a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the priority (lower = more urgent).
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the region tag.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Stop id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Fee paid for the delivery.
    pub fn delivery_fee(&self) -> f64 {
        self.delivery_fee
    }

    /// Expected tip.
    pub fn estimated_tip(&self) -> f64 {
        self.estimated_tip
    }

    /// Priority (lower = more urgent).
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Region tag.
    pub fn region(&self) -> Region {
        self.region
    }

    /// `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.is_depot
    }

    /// `true` for priorities 1 and 2 (and 0).
    pub fn is_urgent(&self) -> bool {
        self.priority <= Self::URGENT_MAX_PRIORITY
    }

    /// Tip tier relative to `high_tip_threshold` (inclusive).
    pub fn tip_tier(&self, high_tip_threshold: f64) -> TipTier {
        if self.estimated_tip >= high_tip_threshold {
            TipTier::High
        } else {
            TipTier::Low
        }
    }

    /// Euclidean distance to another stop.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub(crate) fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn has_finite_amounts(&self) -> bool {
        self.delivery_fee.is_finite() && self.estimated_tip.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_defaults() {
        let c = Stop::customer(4, 1.0, 2.0, 8.5, 1.25);
        assert_eq!(c.id(), 4);
        assert_eq!(c.x(), 1.0);
        assert_eq!(c.y(), 2.0);
        assert_eq!(c.delivery_fee(), 8.5);
        assert_eq!(c.estimated_tip(), 1.25);
        assert_eq!(c.priority(), 3);
        assert_eq!(c.region(), Region::Suburban);
        assert!(c.name().is_none());
        assert!(!c.is_depot());
        assert!(!c.is_urgent());
    }

    #[test]
    fn test_depot() {
        let d = Stop::depot(0, 5.0, 5.0).with_name("Warehouse");
        assert!(d.is_depot());
        assert_eq!(d.delivery_fee(), 0.0);
        assert_eq!(d.estimated_tip(), 0.0);
        assert_eq!(d.name(), Some("Warehouse"));
    }

    #[test]
    fn test_urgency_boundary() {
        let c = Stop::customer(1, 0.0, 0.0, 0.0, 0.0);
        assert!(c.clone().with_priority(1).is_urgent());
        assert!(c.clone().with_priority(2).is_urgent());
        assert!(!c.clone().with_priority(3).is_urgent());
        assert!(!c.with_priority(5).is_urgent());
    }

    #[test]
    fn test_tip_tier_inclusive() {
        let c = Stop::customer(1, 0.0, 0.0, 0.0, 3.0);
        assert_eq!(c.tip_tier(3.0), TipTier::High);
        assert_eq!(c.tip_tier(3.01), TipTier::Low);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Stop::customer(1, 1.0, 2.0, 0.0, 0.0);
        let b = Stop::customer(2, 4.0, 6.0, 0.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_loader_shape() {
        let json = r#"{
            "id": 7, "name": "Duluth", "x": 2.0, "y": 3.0,
            "delivery_fee": 12.0, "tip_estimate": 4.5, "region": "rural"
        }"#;
        let s: Stop = serde_json::from_str(json).expect("valid stop");
        assert_eq!(s.id(), 7);
        assert_eq!(s.name(), Some("Duluth"));
        assert_eq!(s.estimated_tip(), 4.5);
        assert_eq!(s.region(), Region::Rural);
        assert_eq!(s.priority(), Stop::DEFAULT_PRIORITY);
        assert!(!s.is_depot());
    }

    #[test]
    fn test_deserialize_destinations_row() {
        let json = r#"{"id":1,"name":"Duluth","delivery_fee":12.0,"tip_estimate":4.5}"#;
        let s: Stop = serde_json::from_str(json).expect("valid stop");
        assert_eq!(s.id(), 1);
        assert_eq!(s.name(), Some("Duluth"));
        assert_eq!(s.delivery_fee(), 12.0);
        assert_eq!(s.estimated_tip(), 4.5);
        assert_eq!((s.x(), s.y()), (0.0, 0.0));
        assert!(s.has_finite_position());
    }

    #[test]
    fn test_non_finite_amounts() {
        assert!(Stop::customer(1, 0.0, 0.0, 5.0, 1.0).has_finite_amounts());
        assert!(!Stop::customer(1, 0.0, 0.0, f64::NAN, 1.0).has_finite_amounts());
        assert!(!Stop::customer(1, 0.0, 0.0, 5.0, f64::INFINITY).has_finite_amounts());
    }

    #[test]
    fn test_non_finite_position() {
        assert!(Stop::customer(1, 0.0, 0.0, 0.0, 0.0).has_finite_position());
        assert!(!Stop::customer(1, f64::NAN, 0.0, 0.0, 0.0).has_finite_position());
    }
}
