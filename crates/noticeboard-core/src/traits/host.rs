//! Traits the host application implements so the engine can observe its
//! environment.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::UserId;

/// Source of the current time.
///
/// Engine operations also accept an explicit `now` for callers that need
/// deterministic evaluation (tests, replays); the clock backs the
/// convenience entry points. Expected to be monotonically non-decreasing
/// across calls within a process.
pub trait Clock: Send + Sync + std::fmt::Debug + 'static {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Enumerates every known user of the host application.
///
/// Only the reset sweep needs this; regular evaluation touches a single
/// user at a time.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// All user ids known to the host.
    async fn all_user_ids(&self) -> AppResult<Vec<UserId>>;
}
