//! Explicit board-state store.
//!
//! Replaces the ambient query cache of a browser client with an explicit
//! object owned by the board: the last-fetched stages and items, the
//! grouping derived from them, and explicit invalidate/replace
//! operations. All mutation happens synchronously on the caller's thread.

use crate::board::StageGrouping;
use crate::models::{BoardItem, ItemId, Stage, StageId};

/// Working copy of one board's backend state.
#[derive(Debug, Clone)]
pub struct BoardStore<I> {
    stages: Vec<Stage>,
    items: Vec<I>,
    grouping: StageGrouping<I>,
    stale: bool,
}

impl<I: BoardItem> BoardStore<I> {
    /// Creates an empty store, marked stale until the first fetch lands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            items: Vec::new(),
            grouping: StageGrouping::empty(),
            stale: true,
        }
    }

    /// Replaces both stages and items and rebuilds the grouping.
    ///
    /// Stages are ordered by their ordinal position; the backend's list
    /// order is not trusted.
    pub fn replace(&mut self, mut stages: Vec<Stage>, items: Vec<I>) {
        stages.sort_by_key(|s| (s.order, s.id));
        self.grouping = StageGrouping::build(&stages, &items);
        self.stages = stages;
        self.items = items;
        self.stale = false;
    }

    /// Replaces the items only, rebuilding the grouping against the
    /// already-known stages.
    pub fn replace_items(&mut self, items: Vec<I>) {
        self.grouping = StageGrouping::build(&self.stages, &items);
        self.items = items;
        self.stale = false;
    }

    /// Marks the store's contents as stale without discarding them.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether the contents are stale (never fetched, or invalidated).
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The known stages, in column order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The last-fetched item list, unpartitioned.
    #[must_use]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The derived stage grouping.
    #[must_use]
    pub fn grouping(&self) -> &StageGrouping<I> {
        &self.grouping
    }

    /// Finds an item in the flat item list.
    #[must_use]
    pub fn find(&self, item_id: ItemId) -> Option<&I> {
        self.items.iter().find(|i| i.item_id() == item_id)
    }

    /// Applies an optimistic move: reassigns the item's stage in the flat
    /// list and shifts it to the end of the destination group.
    ///
    /// Returns false and changes nothing when the move is not applicable.
    pub fn apply_move(&mut self, item_id: ItemId, origin: StageId, dest: StageId) -> bool {
        if !self.grouping.move_to_end(item_id, origin, dest) {
            return false;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.item_id() == item_id) {
            item.assign_stage(Some(dest));
        }
        true
    }
}

impl<I: BoardItem> Default for BoardStore<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityType, Vacancy};
    use crate::testing::fixtures;
    use pretty_assertions::assert_eq;

    fn store() -> BoardStore<Vacancy> {
        let mut store = BoardStore::new();
        store.replace(
            vec![
                // out of ordinal order on purpose
                Stage::new(2, "Sourcing", 2, EntityType::Vacancy),
                Stage::new(1, "New", 1, EntityType::Vacancy),
            ],
            vec![fixtures::vacancy(10, Some(1)), fixtures::vacancy(11, Some(2))],
        );
        store
    }

    #[test]
    fn test_replace_sorts_stages_and_clears_staleness() {
        let store = store();
        assert!(!store.is_stale());
        let ids: Vec<_> = store.stages().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.grouping().stage_ids(), &[1, 2]);
    }

    #[test]
    fn test_new_store_is_stale() {
        let store: BoardStore<Vacancy> = BoardStore::new();
        assert!(store.is_stale());
        assert!(store.stages().is_empty());
    }

    #[test]
    fn test_invalidate_and_refresh() {
        let mut store = store();
        store.invalidate();
        assert!(store.is_stale());

        store.replace_items(vec![fixtures::vacancy(10, Some(2))]);
        assert!(!store.is_stale());
        assert_eq!(store.grouping().group(2).len(), 1);
        assert_eq!(store.grouping().group(1).len(), 0);
    }

    #[test]
    fn test_apply_move_updates_flat_list_and_grouping() {
        let mut store = store();
        assert!(store.apply_move(10, 1, 2));

        assert_eq!(store.find(10).and_then(BoardItem::stage_id), Some(2));
        let ids: Vec<_> = store.grouping().group(2).iter().map(BoardItem::item_id).collect();
        assert_eq!(ids, vec![11, 10]);
    }

    #[test]
    fn test_apply_move_rejects_unknown_item() {
        let mut store = store();
        assert!(!store.apply_move(99, 1, 2));
        assert_eq!(store.grouping().item_count(), 2);
    }
}
