//! Behavioral tests for the pipeline board.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::board::{BoardState, DragPhase, DropOutcome, PipelineBoard, VacancyBoard};
use crate::models::{ApplicationFilter, BoardItem, EntityType, Stage, Vacancy, VacancyFilter};
use crate::notify::{CollectingNotifier, Severity};
use crate::testing::{fixtures, StubSource};

fn two_stage_board(
    items: Vec<Vacancy>,
) -> (VacancyBoard<Arc<StubSource<Vacancy>>>, Arc<StubSource<Vacancy>>, Arc<CollectingNotifier>) {
    let stages = vec![
        Stage::new(1, "New", 1, EntityType::Vacancy),
        Stage::new(2, "Interview", 2, EntityType::Vacancy),
    ];
    let source = Arc::new(StubSource::new(stages, items));
    let notifier = Arc::new(CollectingNotifier::new());
    let board = PipelineBoard::new(Arc::clone(&source))
        .with_filter(VacancyFilter::default())
        .with_notifier(Arc::clone(&notifier) as Arc<dyn crate::notify::Notifier>);
    (board, source, notifier)
}

fn column_ids<I: BoardItem, S: crate::api::ItemSource<I>>(
    board: &PipelineBoard<I, S>,
    stage_id: i64,
) -> Vec<i64> {
    board
        .store()
        .grouping()
        .group(stage_id)
        .iter()
        .map(BoardItem::item_id)
        .collect()
}

#[tokio::test]
async fn test_load_builds_grouping() {
    let (mut board, _, _) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    assert_eq!(board.state(), BoardState::Loading);
    assert!(board.columns().is_empty());

    board.load().await.unwrap();

    assert_eq!(board.state(), BoardState::Ready);
    let columns = board.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].stage.name, "New");
    assert_eq!(columns[0].items.len(), 1);
    assert_eq!(columns[1].items.len(), 0);
}

#[tokio::test]
async fn test_load_failure_is_blocking() {
    let (mut board, source, _) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    source.fail_list_stages(true);

    assert!(board.load().await.is_err());
    assert_eq!(board.state(), BoardState::Failed);
    assert!(board.columns().is_empty());

    // Item fetch failure is just as blocking.
    source.fail_list_stages(false);
    source.fail_list_items(true);
    assert!(board.load().await.is_err());
    assert_eq!(board.state(), BoardState::Failed);
}

#[tokio::test]
async fn test_items_with_null_or_unknown_stage_are_not_shown() {
    let (mut board, _, _) = two_stage_board(vec![
        fixtures::vacancy(10, Some(1)),
        fixtures::vacancy(11, None),
        fixtures::vacancy(12, Some(42)),
    ]);
    board.load().await.unwrap();

    assert_eq!(board.store().grouping().item_count(), 1);
    // both exist in the flat list but sit in no column, so neither can
    // be picked up
    assert!(board.store().find(11).is_some());
    assert!(board.store().find(12).is_some());
    assert!(!board.begin_drag(11));
    assert!(!board.begin_drag(12));
    assert_eq!(board.drag_phase(), DragPhase::Idle);
}

#[tokio::test]
async fn test_drop_on_own_stage_is_noop() {
    let (mut board, source, notifier) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();

    assert!(board.begin_drag(10));
    let outcome = board.drop_on(Some(1)).await.unwrap();

    assert_eq!(outcome, DropOutcome::Ignored);
    assert!(source.update_calls().is_empty());
    assert_eq!(column_ids(&board, 1), vec![10]);
    assert!(notifier.is_empty());
    assert_eq!(board.drag_phase(), DragPhase::Idle);
}

#[tokio::test]
async fn test_drop_outside_any_column_is_noop() {
    let (mut board, source, _) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();

    assert!(board.begin_drag(10));
    assert_eq!(board.drop_on(None).await.unwrap(), DropOutcome::Ignored);

    assert!(board.begin_drag(10));
    // destination id that matches no column
    assert_eq!(board.drop_on(Some(77)).await.unwrap(), DropOutcome::Ignored);

    assert!(source.update_calls().is_empty());
}

#[tokio::test]
async fn test_successful_move_appends_to_destination() {
    let (mut board, source, notifier) = two_stage_board(vec![
        fixtures::vacancy(10, Some(1)),
        fixtures::vacancy(11, Some(2)),
    ]);
    board.load().await.unwrap();

    assert!(board.begin_drag(10));
    let outcome = board.drop_on(Some(2)).await.unwrap();

    assert_eq!(outcome, DropOutcome::Moved);
    assert_eq!(column_ids(&board, 1), Vec::<i64>::new());
    // appended after the pre-existing item in the destination
    assert_eq!(column_ids(&board, 2), vec![11, 10]);
    assert_eq!(source.update_calls(), vec![(10, 2)]);
    assert_eq!(notifier.of_severity(Severity::Success).len(), 1);
    // confirmed optimistically: no extra item fetch beyond the load
    assert_eq!(source.item_list_calls(), 1);
}

#[tokio::test]
async fn test_rejected_move_resyncs_from_backend() {
    let (mut board, source, notifier) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();
    source.fail_update(true);

    assert!(board.begin_drag(10));
    let outcome = board.drop_on(Some(2)).await.unwrap();

    assert_eq!(outcome, DropOutcome::Rejected);
    assert_eq!(notifier.of_severity(Severity::Error).len(), 1);
    // load + post-rejection resync
    assert_eq!(source.item_list_calls(), 2);
    // the optimistic guess was discarded; backend still has the item in 1
    assert_eq!(column_ids(&board, 1), vec![10]);
    assert_eq!(column_ids(&board, 2), Vec::<i64>::new());
    assert_eq!(board.state(), BoardState::Ready);
}

#[tokio::test]
async fn test_rejected_move_with_failed_resync_blocks_board() {
    let (mut board, source, notifier) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();
    source.fail_update(true);
    source.fail_list_items(true);

    assert!(board.begin_drag(10));
    assert!(board.drop_on(Some(2)).await.is_err());

    assert_eq!(board.state(), BoardState::Failed);
    assert_eq!(notifier.of_severity(Severity::Error).len(), 1);
}

#[tokio::test]
async fn test_cancel_drag_clears_state_without_calls() {
    let (mut board, source, notifier) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();

    assert!(board.begin_drag(10));
    assert_eq!(board.drag_phase(), DragPhase::Dragging);
    assert_eq!(board.active_item().map(BoardItem::item_id), Some(10));

    board.cancel_drag();

    assert_eq!(board.drag_phase(), DragPhase::Idle);
    assert!(board.active_item().is_none());
    assert!(source.update_calls().is_empty());
    assert!(notifier.is_empty());
    assert_eq!(column_ids(&board, 1), vec![10]);
}

#[tokio::test]
async fn test_second_drag_refused_until_drop_handled() {
    let (mut board, _, _) = two_stage_board(vec![
        fixtures::vacancy(10, Some(1)),
        fixtures::vacancy(11, Some(2)),
    ]);
    board.load().await.unwrap();

    assert!(board.begin_drag(10));
    assert!(!board.begin_drag(11));

    board.cancel_drag();
    assert!(board.begin_drag(11));
}

#[tokio::test]
async fn test_drag_refused_before_load() {
    let (mut board, _, _) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    assert!(!board.begin_drag(10));
}

#[tokio::test]
async fn test_drop_without_gesture_is_ignored() {
    let (mut board, source, _) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();

    assert_eq!(board.drop_on(Some(2)).await.unwrap(), DropOutcome::Ignored);
    assert!(source.update_calls().is_empty());
}

// The two end-to-end scenarios: New/Interview with a single item.

#[tokio::test]
async fn test_scenario_move_succeeds() {
    let (mut board, _, notifier) = two_stage_board(vec![fixtures::vacancy(1, Some(1))]);
    board.load().await.unwrap();
    assert_eq!(column_ids(&board, 1), vec![1]);
    assert_eq!(column_ids(&board, 2), Vec::<i64>::new());

    assert!(board.begin_drag(1));
    assert_eq!(board.drop_on(Some(2)).await.unwrap(), DropOutcome::Moved);

    assert_eq!(column_ids(&board, 1), Vec::<i64>::new());
    assert_eq!(column_ids(&board, 2), vec![1]);
    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Success);
}

#[tokio::test]
async fn test_scenario_move_rejected() {
    let (mut board, source, notifier) = two_stage_board(vec![fixtures::vacancy(1, Some(1))]);
    board.load().await.unwrap();
    source.fail_update(true);

    assert!(board.begin_drag(1));
    assert_eq!(board.drop_on(Some(2)).await.unwrap(), DropOutcome::Rejected);

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Error);
    // grouping rebuilt strictly from the re-fetched list
    assert_eq!(column_ids(&board, 1), vec![1]);
    assert_eq!(column_ids(&board, 2), Vec::<i64>::new());
}

#[tokio::test]
async fn test_application_board_flavor() {
    let source = Arc::new(StubSource::new(
        fixtures::application_stages(),
        vec![
            fixtures::application(50, Some(1)),
            fixtures::application(51, Some(2)),
        ],
    ));
    let mut board = PipelineBoard::new(Arc::clone(&source))
        .with_filter(ApplicationFilter::for_vacancy(250));
    board.load().await.unwrap();

    assert_eq!(board.columns().len(), 4);
    assert!(board.begin_drag(50));
    assert_eq!(board.drop_on(Some(3)).await.unwrap(), DropOutcome::Moved);
    assert_eq!(source.update_calls(), vec![(50, 3)]);
    assert_eq!(
        board.store().find(50).and_then(BoardItem::stage_id),
        Some(3)
    );
}

#[tokio::test]
async fn test_refresh_items_rebuilds_grouping() {
    let (mut board, source, _) = two_stage_board(vec![fixtures::vacancy(10, Some(1))]);
    board.load().await.unwrap();

    // another user moved the item on the backend
    source.set_items(vec![fixtures::vacancy(10, Some(2))]);
    board.invalidate();
    assert!(board.store().is_stale());

    board.refresh_items().await.unwrap();
    assert!(!board.store().is_stale());
    assert_eq!(column_ids(&board, 2), vec![10]);
}
