//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use noticeboard::{
    DismissalProcessor, MemoryNoticeStore, NoticeDefinition, NoticeKind, NoticeRegistry,
    NoticeStateStore, SchedulingEngine, UserContext, UserId,
};

/// Engine, processor, and store sharing one registry.
pub struct TestHarness {
    pub engine: SchedulingEngine,
    pub processor: DismissalProcessor,
    pub store: Arc<MemoryNoticeStore>,
    pub ctx: UserContext,
}

impl TestHarness {
    /// Build a harness around the given definitions for one admin user.
    pub fn new(definitions: Vec<NoticeDefinition>) -> Self {
        let registry = Arc::new(NoticeRegistry::load(definitions).expect("valid definitions"));
        let store = Arc::new(MemoryNoticeStore::new());
        let engine = SchedulingEngine::new(
            registry.clone(),
            store.clone() as Arc<dyn NoticeStateStore>,
        );
        let processor =
            DismissalProcessor::new(registry, store.clone() as Arc<dyn NoticeStateStore>);
        Self {
            engine,
            processor,
            store,
            ctx: UserContext::admin(UserId::new()),
        }
    }

    /// Ids of the notices the user would see at `now`.
    pub async fn shown_at(&self, now: DateTime<Utc>) -> Vec<String> {
        self.engine
            .eligible_notices_at(&self.ctx, now)
            .await
            .expect("evaluation succeeds")
            .into_iter()
            .map(|def| def.id.to_string())
            .collect()
    }
}

/// Fixed origin instant for scenario timelines.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// `t0` plus whole days and extra seconds.
pub fn at(days: i64, seconds: i64) -> DateTime<Utc> {
    t0() + Duration::days(days) + Duration::seconds(seconds)
}

/// Shorthand definition constructor.
pub fn notice(id: &str) -> NoticeDefinition {
    NoticeDefinition::new(id, NoticeKind::Info, "title", "description")
}
