//! Dismissal processing, including chain successor arming.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use noticeboard_core::traits::{Clock, NoticeStateStore, SystemClock};
use noticeboard_core::types::NoticeId;
use noticeboard_core::AppResult;

use crate::context::UserContext;
use crate::registry::NoticeRegistry;

/// Applies a user's dismissal of one notice.
#[derive(Debug, Clone)]
pub struct DismissalProcessor {
    registry: Arc<NoticeRegistry>,
    store: Arc<dyn NoticeStateStore>,
    clock: Arc<dyn Clock>,
}

impl DismissalProcessor {
    /// Creates a processor reading the system clock.
    pub fn new(registry: Arc<NoticeRegistry>, store: Arc<dyn NoticeStateStore>) -> Self {
        Self::with_clock(registry, store, Arc::new(SystemClock))
    }

    /// Creates a processor with an explicit clock.
    pub fn with_clock(
        registry: Arc<NoticeRegistry>,
        store: Arc<dyn NoticeStateStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            store,
            clock,
        }
    }

    /// Dismiss a notice for the acting user, timed at the clock's now.
    pub async fn dismiss(&self, ctx: &UserContext, notice_id: &NoticeId) -> AppResult<()> {
        self.dismiss_at(ctx, notice_id, self.clock.now()).await
    }

    /// Dismiss a notice for the acting user at the given instant.
    ///
    /// Marks the notice dismissed (sticky until reset) and, if it chains
    /// to a successor, overwrites the successor's eligibility timestamp
    /// with `now + display_after_days_next`. The pre-dismissal flag is
    /// read first so a repeated dismissal never re-arms the successor's
    /// countdown.
    ///
    /// Unknown notice ids and non-admin contexts are no-ops: dismissal
    /// requests arrive from the outside world and may be stale or forged.
    pub async fn dismiss_at(
        &self,
        ctx: &UserContext,
        notice_id: &NoticeId,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if !ctx.is_admin {
            return Ok(());
        }
        let Some(def) = self.registry.get(notice_id) else {
            debug!(user_id = %ctx.user_id, %notice_id, "ignoring dismissal of unknown notice");
            return Ok(());
        };

        let already_dismissed = self.store.is_dismissed(ctx.user_id, notice_id).await?;
        if !already_dismissed {
            if let Some((next_id, delay)) = def.successor_delay() {
                let due = now + delay;
                self.store.set_timestamp(ctx.user_id, next_id, due).await?;
                debug!(
                    user_id = %ctx.user_id,
                    %notice_id,
                    successor = %next_id,
                    %due,
                    "armed chain successor"
                );
            }
        }

        self.store.set_dismissed(ctx.user_id, notice_id).await?;
        debug!(user_id = %ctx.user_id, %notice_id, "notice dismissed");
        Ok(())
    }
}
