//! Per-user, per-notice scheduling state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable state the engine keeps for one `(user, notice)` pair.
///
/// Created lazily the first time a user's eligibility is evaluated for a
/// notice, mutated on dismissal, removed on reset. How (and whether) the
/// two fields are stored together is the host store's concern; this is
/// the logical record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNoticeState {
    /// Instant before which the notice is not time-eligible.
    pub eligible_at: Option<DateTime<Utc>>,
    /// Whether the user has dismissed the notice. Sticky until cleared.
    pub dismissed: bool,
}

impl UserNoticeState {
    /// Whether the record carries no information and can be dropped.
    pub fn is_empty(&self) -> bool {
        self.eligible_at.is_none() && !self.dismissed
    }
}
