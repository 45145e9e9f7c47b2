//! Behavioral tests for the gestures the components forward to the board
//!
//! Same `GoalBoard` the browser uses, over in-memory storage.

#![allow(clippy::panic)]

use std::sync::Arc;

use goalboard_core::notice::{
    ALL_CLEARED, CONFIRM_CLEAR, FILL_ALL_FIELDS, GOAL_REMOVED, NOTHING_TO_CLEAR,
};
use goalboard_core::{
    FixedClock, GoalBoard, GoalStore, MemoryStorage, Notice, NoticeKind, is_submit_key,
};

type MemoryBoard = GoalBoard<Arc<MemoryStorage>, FixedClock>;

fn open(storage: &Arc<MemoryStorage>) -> MemoryBoard {
    GoalBoard::loaded(GoalStore::with_clock(
        Arc::clone(storage),
        FixedClock::at_millis(1_714_566_600_000),
        "metas",
    ))
}

fn titles(board: &MemoryBoard) -> Vec<String> {
    board.goals().iter().map(|goal| goal.title.clone()).collect()
}

// ============================================================================
// FORM SUBMISSION BEHAVIORS
// ============================================================================

#[test]
fn given_filled_form_when_submitting_then_goal_is_shown_on_top() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);
    let _ = board.submit("Learn Go", "finish tutorial");

    // When
    let result = board.submit("Read docs", "review the guide");

    // Then
    assert!(result.is_ok());
    assert_eq!(titles(&board), vec!["Read docs", "Learn Go"]);
}

#[test]
fn given_blank_description_when_submitting_then_error_banner_and_no_goal() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);

    // When
    let result = board.submit("Learn Go", "   ");

    // Then
    assert_eq!(result, Err(Notice::error(FILL_ALL_FIELDS)));
    assert!(board.is_empty());
    assert!(board.store().is_empty());
}

#[test]
fn given_enter_without_shift_when_checking_key_then_form_submits() {
    assert!(is_submit_key("Enter", false));
    assert!(!is_submit_key("Enter", true));
    assert!(!is_submit_key("Tab", false));
}

// ============================================================================
// REMOVAL BEHAVIORS
// ============================================================================

#[test]
fn given_shown_goal_when_removing_then_success_banner_and_goal_gone() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);
    let goal = match board.submit("Learn Go", "finish tutorial") {
        Ok(goal) => goal,
        Err(notice) => panic!("submit should succeed: {notice:?}"),
    };

    // When
    let notice = board.remove(goal.id);

    // Then
    assert_eq!(notice, Notice::success(GOAL_REMOVED));
    assert!(board.is_empty());
    assert!(open(&storage).is_empty());
}

// ============================================================================
// CLEAR-ALL BEHAVIORS
// ============================================================================

#[test]
fn given_empty_list_when_clearing_then_info_banner_without_prompt() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);

    // When
    let notice = board.clear_all(|_| false);

    // Then
    assert_eq!(notice.map(|n| n.kind), Some(NoticeKind::Info));
    assert_eq!(
        board.clear_all(|_| true).map(|n| n.message),
        Some(NOTHING_TO_CLEAR.to_string())
    );
}

#[test]
fn given_goals_when_user_declines_prompt_then_nothing_changes() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);
    let _ = board.submit("Learn Go", "finish tutorial");
    let mut asked = None;

    // When
    let notice = board.clear_all(|prompt| {
        asked = Some(prompt.to_string());
        false
    });

    // Then
    assert_eq!(notice, None);
    assert_eq!(asked.as_deref(), Some(CONFIRM_CLEAR));
    assert_eq!(titles(&open(&storage)), vec!["Learn Go"]);
}

#[test]
fn given_goals_when_user_confirms_then_list_and_storage_are_empty() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);
    let _ = board.submit("Learn Go", "finish tutorial");
    let _ = board.submit("Read docs", "review the guide");

    // When
    let notice = board.clear_all(|_| true);

    // Then
    assert_eq!(notice, Some(Notice::success(ALL_CLEARED)));
    assert!(board.is_empty());
    assert!(open(&storage).is_empty());
}

// ============================================================================
// RELOAD BEHAVIORS
// ============================================================================

#[test]
fn given_saved_goals_when_page_reloads_then_same_list_in_same_order() {
    // Given
    let storage = MemoryStorage::new_arc();
    let mut board = open(&storage);
    let _ = board.submit("one", "1");
    let _ = board.submit("two", "2");
    let _ = board.submit("three", "3");

    // When
    let reloaded = open(&storage);

    // Then
    assert_eq!(reloaded.goals(), board.goals());
    assert_eq!(titles(&reloaded), vec!["three", "two", "one"]);
}
