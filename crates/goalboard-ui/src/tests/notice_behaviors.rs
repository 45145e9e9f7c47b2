//! Behavioral tests for the banner queue

use goalboard_core::{Notice, NoticeKind};

use crate::state::NoticeQueue;

// ============================================================================
// SHOWING BANNERS
// ============================================================================

#[test]
fn given_empty_queue_when_pushing_then_banner_is_visible_and_not_fading() {
    // Given
    let mut queue = NoticeQueue::new();

    // When
    let id = queue.push(Notice::success("Goal removed successfully!"));

    // Then
    assert_eq!(queue.items().len(), 1);
    assert!(!queue.is_fading(id));
    assert_eq!(
        queue.items().first().map(|item| item.notice.kind),
        Some(NoticeKind::Success)
    );
}

#[test]
fn given_two_banners_when_listing_then_newest_is_first() {
    // Given
    let mut queue = NoticeQueue::new();
    let older = queue.push(Notice::info("first"));
    let newer = queue.push(Notice::error("second"));

    // When
    let ids: Vec<u64> = queue.items().iter().map(|item| item.id).collect();

    // Then
    assert_ne!(older, newer);
    assert_eq!(ids, vec![newer, older]);
}

// ============================================================================
// DISMISSING BANNERS
// ============================================================================

#[test]
fn given_visible_banner_when_fading_then_only_that_banner_fades() {
    // Given
    let mut queue = NoticeQueue::new();
    let a = queue.push(Notice::info("a"));
    let b = queue.push(Notice::info("b"));

    // When
    queue.fade(a);

    // Then
    assert!(queue.is_fading(a));
    assert!(!queue.is_fading(b));
}

#[test]
fn given_faded_banner_when_dismissed_then_it_is_gone() {
    // Given
    let mut queue = NoticeQueue::new();
    let a = queue.push(Notice::info("a"));
    let b = queue.push(Notice::info("b"));
    queue.fade(a);

    // When
    queue.dismiss(a);

    // Then
    assert_eq!(queue.items().len(), 1);
    assert_eq!(queue.items().first().map(|item| item.id), Some(b));
    assert!(!queue.is_fading(a));
}

#[test]
fn given_unknown_id_when_fading_or_dismissing_then_queue_is_unchanged() {
    // Given
    let mut queue = NoticeQueue::new();
    queue.push(Notice::info("keep"));
    let before = queue.clone();

    // When
    queue.fade(99);
    queue.dismiss(99);

    // Then
    assert_eq!(queue, before);
}
