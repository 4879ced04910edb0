//! Eligibility evaluation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use noticeboard_core::notice::NoticeDefinition;
use noticeboard_core::traits::{Clock, NoticeStateStore, SystemClock};
use noticeboard_core::types::UserId;
use noticeboard_core::{AppError, AppResult};

use crate::context::UserContext;
use crate::registry::NoticeRegistry;

/// Decides which notices a user should see right now.
///
/// Holds only the immutable registry and `Arc`s to the host traits, so a
/// single engine instance is safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct SchedulingEngine {
    registry: Arc<NoticeRegistry>,
    store: Arc<dyn NoticeStateStore>,
    clock: Arc<dyn Clock>,
}

impl SchedulingEngine {
    /// Creates an engine reading the system clock.
    pub fn new(registry: Arc<NoticeRegistry>, store: Arc<dyn NoticeStateStore>) -> Self {
        Self::with_clock(registry, store, Arc::new(SystemClock))
    }

    /// Creates an engine with an explicit clock.
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

    /// The registry this engine evaluates.
    pub fn registry(&self) -> &NoticeRegistry {
        &self.registry
    }

    /// All notices the user should see now, in registry order.
    pub async fn eligible_notices(&self, ctx: &UserContext) -> AppResult<Vec<NoticeDefinition>> {
        self.eligible_notices_at(ctx, self.clock.now()).await
    }

    /// All notices the user should see at the given instant, in registry
    /// order.
    ///
    /// Every notice is evaluated, never just the first hit: the host may
    /// render several simultaneously-eligible notices. Evaluation also
    /// initializes the first-observation baseline timestamp for notices
    /// this user has never been evaluated against, whether or not they
    /// are shown this call.
    pub async fn eligible_notices_at(
        &self,
        ctx: &UserContext,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<NoticeDefinition>> {
        if !ctx.is_admin {
            return Ok(Vec::new());
        }

        let mut eligible = Vec::new();
        for def in self.registry.all() {
            if self.is_eligible(ctx.user_id, def, now).await? {
                eligible.push(def.clone());
            }
        }
        debug!(
            user_id = %ctx.user_id,
            eligible = eligible.len(),
            total = self.registry.len(),
            "evaluated notices"
        );
        Ok(eligible)
    }

    /// Per-notice decision ladder: dismissed beats everything, then the
    /// trigger, then the strict time gate.
    async fn is_eligible(
        &self,
        user_id: UserId,
        def: &NoticeDefinition,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        if self.store.is_dismissed(user_id, &def.id).await? {
            return Ok(false);
        }

        // First observation: establish the baseline countdown. Create-once
        // semantics in the store protect against a concurrent evaluator
        // resetting an already-running countdown.
        if self.store.get_timestamp(user_id, &def.id).await?.is_none() {
            let initial = now + def.initial_delay();
            self.store
                .set_timestamp_if_absent(user_id, &def.id, initial)
                .await?;
        }

        if let Some(trigger) = &def.trigger {
            if trigger.fires() {
                return Ok(true);
            }
        }

        let eligible_at = self
            .store
            .get_timestamp(user_id, &def.id)
            .await?
            .ok_or_else(|| {
                AppError::store(format!(
                    "timestamp for notice '{}' missing after initialization",
                    def.id
                ))
            })?;
        Ok(eligible_at < now)
    }
}
