//! Integration tests for the global reset sweep.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;

use helpers::{at, notice, t0, TestHarness};
use noticeboard::{
    AppResult, NoticeRegistry, NoticeStateStore, ResetCoordinator, UserDirectory, UserId,
};

#[derive(Debug)]
struct FixedUsers(Vec<UserId>);

#[async_trait]
impl UserDirectory for FixedUsers {
    async fn all_user_ids(&self) -> AppResult<Vec<UserId>> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_reset_restores_new_user_behavior() {
    let definitions = vec![
        notice("a").with_display_after_days(1).with_next("b", 2),
        notice("b"),
    ];
    let harness = TestHarness::new(definitions.clone());
    let registry = NoticeRegistry::load(definitions).unwrap();

    // Run the user part-way through the chain.
    assert_eq!(harness.shown_at(at(1, 1)).await, ["a"]);
    harness
        .processor
        .dismiss_at(&harness.ctx, &"a".into(), at(1, 1))
        .await
        .unwrap();
    assert_eq!(harness.shown_at(at(3, 2)).await, ["b"]);

    let coordinator = ResetCoordinator::new(
        harness.store.clone() as Arc<dyn NoticeStateStore>,
        Arc::new(FixedUsers(vec![harness.ctx.user_id])),
    );
    let report = coordinator.reset_all(&registry).await.unwrap();
    assert!(report.is_complete());
    assert_eq!(report.cleared, 2);
    assert!(harness.store.is_empty());

    // Countdowns restart from the next observation, as for a new user:
    // A due one day after this fresh first look, B silent again.
    let resumed = at(100, 0);
    assert!(harness.shown_at(resumed).await.is_empty());
    assert_eq!(
        harness.shown_at(at(101, 1)).await,
        ["a"],
        "dismissal forgotten, countdown restarted"
    );
}

#[tokio::test]
async fn test_reset_covers_every_user() {
    let definitions = vec![notice("a").with_display_after_days(1)];
    let harness = TestHarness::new(definitions.clone());
    let registry = NoticeRegistry::load(definitions).unwrap();

    let other = UserId::new();
    harness.store.set_dismissed(other, &"a".into()).await.unwrap();
    harness
        .store
        .set_timestamp(harness.ctx.user_id, &"a".into(), t0())
        .await
        .unwrap();

    let coordinator = ResetCoordinator::new(
        harness.store.clone() as Arc<dyn NoticeStateStore>,
        Arc::new(FixedUsers(vec![harness.ctx.user_id, other])),
    );
    let report = coordinator.reset_all(&registry).await.unwrap();

    assert_eq!(report.cleared, 2);
    assert!(harness.store.is_empty());
}
