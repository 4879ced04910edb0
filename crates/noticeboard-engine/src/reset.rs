//! Global reset sweep.

use std::sync::Arc;

use tracing::{debug, warn};

use noticeboard_core::traits::{NoticeStateStore, UserDirectory};
use noticeboard_core::types::{NoticeId, UserId};
use noticeboard_core::AppResult;

use crate::registry::NoticeRegistry;

/// One `(user, notice)` pair that could not be cleared.
#[derive(Debug, Clone)]
pub struct ResetFailure {
    /// The user whose state failed to clear.
    pub user_id: UserId,
    /// The notice whose state failed to clear.
    pub notice_id: NoticeId,
    /// Store error message.
    pub message: String,
}

/// Outcome of a reset sweep.
#[derive(Debug, Clone, Default)]
pub struct ResetReport {
    /// Number of `(user, notice)` pairs cleared.
    pub cleared: u64,
    /// Pairs that failed; the sweep continued past each of them.
    pub failures: Vec<ResetFailure>,
}

impl ResetReport {
    /// Whether every pair was cleared.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Wipes per-user notice state for every user, restarting all countdowns.
///
/// Invoked on host lifecycle events (e.g. re-activation). After a
/// complete sweep every user behaves like a brand-new user on their next
/// evaluation.
#[derive(Debug, Clone)]
pub struct ResetCoordinator {
    store: Arc<dyn NoticeStateStore>,
    users: Arc<dyn UserDirectory>,
}

impl ResetCoordinator {
    /// Creates a reset coordinator.
    pub fn new(store: Arc<dyn NoticeStateStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self { store, users }
    }

    /// Clear state for every user × every registered notice.
    ///
    /// A failure clearing one pair is recorded and the sweep continues;
    /// only a failure enumerating users aborts, since there is nothing to
    /// sweep without them.
    pub async fn reset_all(&self, registry: &NoticeRegistry) -> AppResult<ResetReport> {
        let user_ids = self.users.all_user_ids().await?;
        let mut report = ResetReport::default();

        for user_id in user_ids {
            for def in registry.all() {
                match self.store.clear(user_id, &def.id).await {
                    Ok(()) => report.cleared += 1,
                    Err(err) => {
                        warn!(%user_id, notice_id = %def.id, error = %err, "failed to clear notice state");
                        report.failures.push(ResetFailure {
                            user_id,
                            notice_id: def.id.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            cleared = report.cleared,
            failed = report.failures.len(),
            "reset sweep finished"
        );
        Ok(report)
    }
}
