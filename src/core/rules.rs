//! Ordered threshold tables.
//!
//! Scoring tables are lists of tiers evaluated top to bottom. The first tier
//! whose bound matches wins and the rest of the list is skipped.

/// A one-sided comparison against a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Below(f64),
    AtMost(f64),
    Equal(f64),
    AtLeast(f64),
    Above(f64),
}

impl Bound {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Bound::Below(t) => value < t,
            Bound::AtMost(t) => value <= t,
            Bound::Equal(t) => value == t,
            Bound::AtLeast(t) => value >= t,
            Bound::Above(t) => value > t,
        }
    }
}

/// A scored tier with an attached payload (texts, labels).
#[derive(Debug, Clone, Copy)]
pub struct Tier<P> {
    pub bound: Bound,
    pub points: u32,
    pub payload: P,
}

impl<P> Tier<P> {
    pub const fn new(bound: Bound, points: u32, payload: P) -> Self {
        Self {
            bound,
            points,
            payload,
        }
    }
}

/// First tier in `tiers` matching `value`.
pub fn first_match<P>(tiers: &[Tier<P>], value: f64) -> Option<&Tier<P>> {
    tiers.iter().find(|tier| tier.bound.matches(value))
}
