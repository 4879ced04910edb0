//! In-memory notice state store using the dashmap crate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use noticeboard_core::notice::UserNoticeState;
use noticeboard_core::result::AppResult;
use noticeboard_core::traits::NoticeStateStore;
use noticeboard_core::types::{NoticeId, UserId};

type StateKey = (UserId, NoticeId);

/// In-memory notice state store.
///
/// Entries live under the logical `(user, notice)` key. The dashmap entry
/// API holds the shard lock across read-modify-write, which makes
/// `set_timestamp_if_absent` a true check-and-set.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoticeStore {
    entries: Arc<DashMap<StateKey, UserNoticeState>>,
}

impl MemoryNoticeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `(user, notice)` records currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl NoticeStateStore for MemoryNoticeStore {
    async fn get_timestamp(
        &self,
        user_id: UserId,
        notice_id: &NoticeId,
    ) -> AppResult<Option<DateTime<Utc>>> {
        Ok(self
            .entries
            .get(&(user_id, notice_id.clone()))
            .and_then(|state| state.eligible_at))
    }

    async fn set_timestamp_if_absent(
        &self,
        user_id: UserId,
        notice_id: &NoticeId,
        value: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut entry = self
            .entries
            .entry((user_id, notice_id.clone()))
            .or_default();
        if entry.eligible_at.is_none() {
            entry.eligible_at = Some(value);
            debug!(%user_id, %notice_id, %value, "initialized eligibility timestamp");
        }
        Ok(())
    }

    async fn set_timestamp(
        &self,
        user_id: UserId,
        notice_id: &NoticeId,
        value: DateTime<Utc>,
    ) -> AppResult<()> {
        self.entries
            .entry((user_id, notice_id.clone()))
            .or_default()
            .eligible_at = Some(value);
        Ok(())
    }

    async fn is_dismissed(&self, user_id: UserId, notice_id: &NoticeId) -> AppResult<bool> {
        Ok(self
            .entries
            .get(&(user_id, notice_id.clone()))
            .map(|state| state.dismissed)
            .unwrap_or(false))
    }

    async fn set_dismissed(&self, user_id: UserId, notice_id: &NoticeId) -> AppResult<()> {
        self.entries
            .entry((user_id, notice_id.clone()))
            .or_default()
            .dismissed = true;
        Ok(())
    }

    async fn clear(&self, user_id: UserId, notice_id: &NoticeId) -> AppResult<()> {
        self.entries.remove(&(user_id, notice_id.clone()));
        Ok(())
    }
}
