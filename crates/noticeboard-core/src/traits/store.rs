//! Per-user notice state persistence trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::{NoticeId, UserId};

/// Host-provided persistence for per-user notice state.
///
/// State is logically keyed by `(user, notice)`; key naming and storage
/// medium are entirely the implementor's concern. All operations must be
/// safe to call concurrently for different keys. For the same key,
/// [`set_timestamp_if_absent`](Self::set_timestamp_if_absent) must be a
/// true create-once primitive: two concurrent initializers for the same
/// pair result in at most one effective write.
#[async_trait]
pub trait NoticeStateStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get the eligibility timestamp. `None` if never initialized.
    async fn get_timestamp(
        &self,
        user_id: UserId,
        notice_id: &NoticeId,
    ) -> AppResult<Option<DateTime<Utc>>>;

    /// Set the eligibility timestamp only if none exists yet. Idempotent
    /// and race-tolerant.
    async fn set_timestamp_if_absent(
        &self,
        user_id: UserId,
        notice_id: &NoticeId,
        value: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Unconditionally overwrite the eligibility timestamp.
    async fn set_timestamp(
        &self,
        user_id: UserId,
        notice_id: &NoticeId,
        value: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Whether the user has dismissed the notice.
    async fn is_dismissed(&self, user_id: UserId, notice_id: &NoticeId) -> AppResult<bool>;

    /// Mark the notice dismissed. Idempotent; once set it stays set until
    /// [`clear`](Self::clear).
    async fn set_dismissed(&self, user_id: UserId, notice_id: &NoticeId) -> AppResult<()>;

    /// Remove both the timestamp and the dismissed flag.
    async fn clear(&self, user_id: UserId, notice_id: &NoticeId) -> AppResult<()>;
}
