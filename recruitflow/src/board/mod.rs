//! The pipeline board: stage columns, drag-and-drop, optimistic moves.
//!
//! The board is headless. It owns a [`BoardStore`] working copy of the
//! backend state, groups items into stage columns, and translates drag
//! gestures into persisted stage changes, surfacing outcomes through a
//! [`Notifier`]. A UI layer renders [`columns`](PipelineBoard::columns)
//! and feeds input events back in.

mod drag;
mod grouping;

#[cfg(test)]
mod board_tests;

pub use drag::{DragGesture, DragPhase};
pub use grouping::StageGrouping;

use std::sync::Arc;

use crate::api::ItemSource;
use crate::errors::BoardError;
use crate::models::{Application, BoardItem, ItemId, Stage, StageId, Vacancy};
use crate::notify::{NoOpNotifier, Notifier, Toast};
use crate::store::BoardStore;

/// Load state of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardState {
    /// Initial fetches have not completed.
    #[default]
    Loading,
    /// Stages and items are loaded; columns are available.
    Ready,
    /// A stage or item fetch failed; no grouping is shown.
    Failed,
}

/// Outcome of a drop, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing happened: no gesture, no valid destination, or a drop
    /// onto the item's own stage.
    Ignored,
    /// The backend confirmed the move; the optimistic state stands.
    Moved,
    /// The backend rejected the move; the item list was re-fetched.
    Rejected,
}

/// One rendered column: a stage and the items believed to be in it.
#[derive(Debug)]
pub struct BoardColumn<'a, I> {
    /// The stage this column represents.
    pub stage: &'a Stage,
    /// Items in this column, oldest placement first.
    pub items: &'a [I],
}

/// A kanban-style board tracking work items through pipeline stages.
///
/// Single-threaded by construction: every mutation happens inside a
/// `&mut self` call on the UI task, and the only suspension points are
/// the awaited backend calls.
pub struct PipelineBoard<I: BoardItem, S: ItemSource<I>> {
    source: S,
    notifier: Arc<dyn Notifier>,
    filter: I::Filter,
    store: BoardStore<I>,
    gesture: DragGesture,
    state: BoardState,
}

/// Board over candidate applications, filtered by vacancy, candidate, or
/// company.
pub type ApplicationBoard<S> = PipelineBoard<Application, S>;

/// Board over vacancies, filtered by company and active flag.
pub type VacancyBoard<S> = PipelineBoard<Vacancy, S>;

impl<I: BoardItem, S: ItemSource<I>> PipelineBoard<I, S> {
    /// Creates a board with a default (unrestricted) filter and no
    /// notification sink.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            notifier: Arc::new(NoOpNotifier),
            filter: I::Filter::default(),
            store: BoardStore::new(),
            gesture: DragGesture::default(),
            state: BoardState::Loading,
        }
    }

    /// Restricts the board to items matching a filter.
    #[must_use]
    pub fn with_filter(mut self, filter: I::Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the sink that receives user-facing toasts.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Fetches stages and items and rebuilds the grouping.
    ///
    /// On any fetch failure the board enters [`BoardState::Failed`] and
    /// no partial grouping is kept.
    pub async fn load(&mut self) -> Result<(), BoardError> {
        self.state = BoardState::Loading;

        let stages = match self.source.list_stages(I::entity_type()).await {
            Ok(stages) => stages,
            Err(err) => return Err(self.fail_load(err)),
        };
        let items = match self.source.list_items(&self.filter).await {
            Ok(items) => items,
            Err(err) => return Err(self.fail_load(err)),
        };

        tracing::debug!(
            entity_type = %I::entity_type(),
            stages = stages.len(),
            items = items.len(),
            "board loaded"
        );
        self.store.replace(stages, items);
        self.state = BoardState::Ready;
        Ok(())
    }

    /// Re-fetches the item list only, keeping the known stages.
    pub async fn refresh_items(&mut self) -> Result<(), BoardError> {
        let items = match self.source.list_items(&self.filter).await {
            Ok(items) => items,
            Err(err) => return Err(self.fail_load(err)),
        };
        self.store.replace_items(items);
        self.state = BoardState::Ready;
        Ok(())
    }

    fn fail_load(&mut self, err: crate::errors::ApiError) -> BoardError {
        tracing::warn!(error = %err, "board load failed");
        self.state = BoardState::Failed;
        BoardError::LoadFailed(err)
    }

    /// Starts dragging an item, capturing its current stage as the
    /// origin.
    ///
    /// Refused (returns false) when the board is not ready, a gesture is
    /// already in progress, or the item is unknown or sits in no column
    /// (null or unknown stage reference).
    pub fn begin_drag(&mut self, item_id: ItemId) -> bool {
        if self.state != BoardState::Ready {
            return false;
        }
        let Some(item) = self.store.find(item_id) else {
            tracing::debug!(item_id, "drag refused: unknown item");
            return false;
        };
        let Some(origin) = item
            .stage_id()
            .filter(|s| self.store.grouping().contains_stage(*s))
        else {
            tracing::debug!(item_id, "drag refused: item is not on a column");
            return false;
        };
        self.gesture.begin(item_id, origin)
    }

    /// Drops the dragged item onto a stage column, or onto nothing.
    ///
    /// A drop onto the origin stage, onto an unknown stage, or outside
    /// any column clears the gesture without touching the grouping or the
    /// backend. Otherwise the move is applied optimistically and the
    /// stage update is sent; a rejection surfaces an error toast and
    /// triggers a wholesale item re-fetch.
    pub async fn drop_on(&mut self, dest: Option<StageId>) -> Result<DropOutcome, BoardError> {
        let DragGesture::Dragging { item_id, origin } = self.gesture else {
            return Ok(DropOutcome::Ignored);
        };

        let Some(dest) = dest.filter(|d| self.store.grouping().contains_stage(*d)) else {
            self.gesture.cancel();
            return Ok(DropOutcome::Ignored);
        };
        if origin == dest {
            self.gesture.cancel();
            return Ok(DropOutcome::Ignored);
        }

        // Optimistic move, then commit to the backend.
        if !self.store.apply_move(item_id, origin, dest) {
            self.gesture.cancel();
            return Ok(DropOutcome::Ignored);
        }
        self.gesture.commit(dest);
        tracing::debug!(item_id, origin, dest, "committing stage move");

        let result = self.source.update_item_stage(item_id, dest).await;
        self.gesture.settle();

        match result {
            Ok(_confirmed) => {
                tracing::info!(item_id, dest, "stage move confirmed");
                self.notifier
                    .notify(Toast::success("Item moved", "Stage updated"));
                Ok(DropOutcome::Moved)
            }
            Err(err) => {
                tracing::warn!(item_id, dest, error = %err, "stage move rejected");
                self.notifier
                    .notify(Toast::error("Error", "Failed to update stage"));
                // Discard the optimistic guess wholesale rather than
                // rolling back the single move.
                self.store.invalidate();
                match self.source.list_items(&self.filter).await {
                    Ok(items) => {
                        self.store.replace_items(items);
                        Ok(DropOutcome::Rejected)
                    }
                    Err(resync_err) => {
                        tracing::warn!(error = %resync_err, "resync failed");
                        self.state = BoardState::Failed;
                        Err(BoardError::ResyncFailed(resync_err))
                    }
                }
            }
        }
    }

    /// Aborts the current gesture without mutating anything.
    pub fn cancel_drag(&mut self) {
        self.gesture.cancel();
    }

    /// The board's load state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// The current gesture phase.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.gesture.phase()
    }

    /// The item being dragged, for overlay rendering.
    #[must_use]
    pub fn active_item(&self) -> Option<&I> {
        self.gesture.active_item().and_then(|id| self.store.find(id))
    }

    /// Stage columns with their items, in stage order.
    ///
    /// Empty unless the board is [`BoardState::Ready`].
    #[must_use]
    pub fn columns(&self) -> Vec<BoardColumn<'_, I>> {
        if self.state != BoardState::Ready {
            return Vec::new();
        }
        self.store
            .stages()
            .iter()
            .map(|stage| BoardColumn {
                stage,
                items: self.store.grouping().group(stage.id),
            })
            .collect()
    }

    /// The board's working-copy store.
    #[must_use]
    pub fn store(&self) -> &BoardStore<I> {
        &self.store
    }

    /// Marks the store stale so the next render knows to reload.
    pub fn invalidate(&mut self) {
        self.store.invalidate();
    }
}
