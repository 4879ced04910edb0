//! Trigger predicates that bypass the time-based eligibility gate.

use std::fmt;
use std::sync::Arc;

/// A boolean-valued predicate attached to a notice definition.
///
/// When the predicate returns `true` the notice is eligible regardless of
/// its eligibility timestamp (dismissal still suppresses it). A trigger
/// that returns `false` falls back to the normal time gate.
#[derive(Clone)]
pub struct Trigger(Arc<dyn Fn() -> bool + Send + Sync>);

impl Trigger {
    /// Create a trigger from a predicate closure.
    pub fn new(predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// A trigger that always fires.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn fires(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Trigger(..)")
    }
}
