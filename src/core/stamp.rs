//! Clock and identifier source for engine-created records.
//!
//! Every output record carries an id and a timestamp. Both come from a
//! [`Stamper`] so that tests can pin them and compare whole records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Supplies timestamps and record identifiers.
pub trait Stamper: Send + Sync {
    /// The instant to record on an output.
    fn now(&self) -> DateTime<Utc>;

    /// A new identifier for a record of the given kind (e.g. `"pattern"`).
    fn next_id(&self, prefix: &str) -> String;
}

/// Wall clock plus random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4())
    }
}

/// A frozen clock. Ids are derived from the frozen instant, so repeated calls
/// yield the same values.
#[derive(Debug, Clone, Copy)]
pub struct FixedStamper {
    at: DateTime<Utc>,
}

impl FixedStamper {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Stamper for FixedStamper {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.at.timestamp_millis())
    }
}
