//! Integration tests for chained notice scheduling.

mod helpers;

use helpers::{at, notice, t0, TestHarness};
use noticeboard::NoticeStateStore;

/// The full three-notice chain: A is shown after 30 days, dismissing it
/// arms B 30 days out, dismissing B arms C 60 days out. B and C have no
/// own delay and would never show on their own.
#[tokio::test]
async fn test_three_notice_chain_timeline() {
    let harness = TestHarness::new(vec![
        notice("a").with_display_after_days(30).with_next("b", 30),
        notice("b").with_next("c", 60),
        notice("c"),
    ]);

    // First observation: everything initialized, nothing due.
    assert!(harness.shown_at(t0()).await.is_empty());

    // A becomes due strictly after 30 days.
    assert!(harness.shown_at(at(30, 0)).await.is_empty());
    assert_eq!(harness.shown_at(at(30, 1)).await, ["a"]);

    // Dismiss A at exactly t=30d; B armed for t=60d.
    harness
        .processor
        .dismiss_at(&harness.ctx, &"a".into(), at(30, 0))
        .await
        .unwrap();
    assert_eq!(
        harness
            .store
            .get_timestamp(harness.ctx.user_id, &"b".into())
            .await
            .unwrap(),
        Some(at(60, 0))
    );
    assert!(harness.shown_at(at(59, 0)).await.is_empty());
    assert!(harness.shown_at(at(60, 0)).await.is_empty());
    assert_eq!(harness.shown_at(at(60, 1)).await, ["b"]);

    // Dismiss B at exactly t=60d; C armed for t=120d.
    harness
        .processor
        .dismiss_at(&harness.ctx, &"b".into(), at(60, 0))
        .await
        .unwrap();
    assert!(harness.shown_at(at(119, 0)).await.is_empty());
    assert_eq!(harness.shown_at(at(120, 1)).await, ["c"]);
}

#[tokio::test]
async fn test_dismissed_notice_never_returns() {
    let harness = TestHarness::new(vec![notice("a").with_display_after_days(1)]);

    assert_eq!(harness.shown_at(at(1, 1)).await, ["a"]);
    harness
        .processor
        .dismiss_at(&harness.ctx, &"a".into(), at(1, 1))
        .await
        .unwrap();

    assert!(harness.shown_at(at(2, 0)).await.is_empty());
    assert!(harness.shown_at(at(10_000, 0)).await.is_empty());
}

#[tokio::test]
async fn test_unparented_undated_notice_stays_silent() {
    let harness = TestHarness::new(vec![notice("orphan")]);

    assert!(harness.shown_at(t0()).await.is_empty());
    assert!(harness.shown_at(at(300, 0)).await.is_empty());
}

#[tokio::test]
async fn test_successor_not_armed_when_parent_undismissed() {
    let harness = TestHarness::new(vec![
        notice("a").with_display_after_days(1).with_next("b", 1),
        notice("b"),
    ]);

    // Evaluate far past every delay; B only has its far-future baseline.
    assert_eq!(harness.shown_at(at(200, 0)).await, ["a"]);
}

#[tokio::test]
async fn test_double_dismissal_keeps_original_chain_timing() {
    let harness = TestHarness::new(vec![
        notice("a").with_display_after_days(1).with_next("b", 10),
        notice("b"),
    ]);

    harness
        .processor
        .dismiss_at(&harness.ctx, &"a".into(), t0())
        .await
        .unwrap();
    // A stale second click days later must not push B out.
    harness
        .processor
        .dismiss_at(&harness.ctx, &"a".into(), at(5, 0))
        .await
        .unwrap();

    assert!(harness.shown_at(at(10, 0)).await.is_empty());
    assert_eq!(harness.shown_at(at(10, 1)).await, ["b"]);
}
