//! Derived grouping of work items by pipeline stage.

use std::collections::HashMap;

use crate::models::{BoardItem, ItemId, Stage, StageId};

/// Items partitioned into per-stage groups.
///
/// Rebuilt wholesale from `(stages, items)`; every item whose stage
/// reference matches a known stage lands in exactly one group, in input
/// order. Items with a null or unknown stage reference are left out
/// entirely. Within a group, a moved item always goes to the end.
#[derive(Debug, Clone)]
pub struct StageGrouping<I> {
    order: Vec<StageId>,
    groups: HashMap<StageId, Vec<I>>,
}

impl<I: BoardItem> StageGrouping<I> {
    /// Builds a grouping from a stage list and an item list.
    #[must_use]
    pub fn build(stages: &[Stage], items: &[I]) -> Self {
        let mut order: Vec<StageId> = Vec::with_capacity(stages.len());
        let mut groups: HashMap<StageId, Vec<I>> = HashMap::with_capacity(stages.len());
        for stage in stages {
            if groups.insert(stage.id, Vec::new()).is_none() {
                order.push(stage.id);
            }
        }
        for item in items {
            if let Some(stage_id) = item.stage_id() {
                if let Some(group) = groups.get_mut(&stage_id) {
                    group.push(item.clone());
                }
            }
        }
        Self { order, groups }
    }

    /// Creates an empty grouping with no stages.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            groups: HashMap::new(),
        }
    }

    /// Stage identifiers in column order.
    #[must_use]
    pub fn stage_ids(&self) -> &[StageId] {
        &self.order
    }

    /// Whether the grouping has a column for a stage.
    #[must_use]
    pub fn contains_stage(&self, stage_id: StageId) -> bool {
        self.groups.contains_key(&stage_id)
    }

    /// The items currently believed to be in a stage, in column order.
    ///
    /// Returns an empty slice for unknown stages.
    #[must_use]
    pub fn group(&self, stage_id: StageId) -> &[I] {
        self.groups.get(&stage_id).map_or(&[], Vec::as_slice)
    }

    /// Finds an item anywhere on the board.
    #[must_use]
    pub fn find(&self, item_id: ItemId) -> Option<&I> {
        self.groups
            .values()
            .flat_map(|group| group.iter())
            .find(|item| item.item_id() == item_id)
    }

    /// Total number of grouped items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Moves an item from one group to the end of another, updating the
    /// item's own stage reference.
    ///
    /// Returns false and leaves the grouping untouched when the item is
    /// not in the origin group or the destination stage is unknown.
    pub fn move_to_end(&mut self, item_id: ItemId, origin: StageId, dest: StageId) -> bool {
        if !self.groups.contains_key(&dest) {
            return false;
        }
        let Some(origin_group) = self.groups.get_mut(&origin) else {
            return false;
        };
        let Some(position) = origin_group.iter().position(|i| i.item_id() == item_id) else {
            return false;
        };
        let mut item = origin_group.remove(position);
        item.assign_stage(Some(dest));
        if let Some(dest_group) = self.groups.get_mut(&dest) {
            dest_group.push(item);
        }
        true
    }
}

impl<I: BoardItem> Default for StageGrouping<I> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityType, Vacancy};
    use crate::testing::fixtures;
    use pretty_assertions::assert_eq;

    fn stages() -> Vec<Stage> {
        vec![
            Stage::new(1, "New", 1, EntityType::Vacancy),
            Stage::new(2, "Sourcing", 2, EntityType::Vacancy),
            Stage::new(3, "Closed", 3, EntityType::Vacancy).terminal(),
        ]
    }

    fn items() -> Vec<Vacancy> {
        vec![
            fixtures::vacancy(10, Some(1)),
            fixtures::vacancy(11, Some(2)),
            fixtures::vacancy(12, Some(1)),
            fixtures::vacancy(13, None),      // never grouped
            fixtures::vacancy(14, Some(99)),  // unknown stage, never grouped
        ]
    }

    #[test]
    fn test_build_partitions_items() {
        let grouping = StageGrouping::build(&stages(), &items());

        assert_eq!(grouping.stage_ids(), &[1, 2, 3]);
        assert_eq!(
            grouping.group(1).iter().map(BoardItem::item_id).collect::<Vec<_>>(),
            vec![10, 12]
        );
        assert_eq!(grouping.group(2).len(), 1);
        assert_eq!(grouping.group(3).len(), 0);
        // null-stage and unknown-stage items appear in no group
        assert_eq!(grouping.item_count(), 3);
        assert!(grouping.find(13).is_none());
        assert!(grouping.find(14).is_none());
    }

    #[test]
    fn test_every_grouped_item_appears_once() {
        let grouping = StageGrouping::build(&stages(), &items());

        for id in [10, 11, 12] {
            let occurrences: usize = grouping
                .stage_ids()
                .iter()
                .map(|s| grouping.group(*s).iter().filter(|i| i.item_id() == id).count())
                .sum();
            assert_eq!(occurrences, 1, "item {id} must appear exactly once");
        }
    }

    #[test]
    fn test_move_to_end_appends() {
        let mut grouping = StageGrouping::build(&stages(), &items());

        assert!(grouping.move_to_end(10, 1, 2));

        assert_eq!(
            grouping.group(1).iter().map(BoardItem::item_id).collect::<Vec<_>>(),
            vec![12]
        );
        // appended after the pre-existing occupant of stage 2
        assert_eq!(
            grouping.group(2).iter().map(BoardItem::item_id).collect::<Vec<_>>(),
            vec![11, 10]
        );
        // the moved item's own stage reference follows it
        assert_eq!(grouping.find(10).and_then(BoardItem::stage_id), Some(2));
    }

    #[test]
    fn test_move_to_unknown_destination_is_rejected() {
        let mut grouping = StageGrouping::build(&stages(), &items());
        assert!(!grouping.move_to_end(10, 1, 99));
        assert_eq!(grouping.group(1).len(), 2);
    }

    #[test]
    fn test_move_of_absent_item_is_rejected() {
        let mut grouping = StageGrouping::build(&stages(), &items());
        assert!(!grouping.move_to_end(13, 1, 2));
        assert!(!grouping.move_to_end(10, 2, 3));
        assert_eq!(grouping.item_count(), 3);
    }

    #[test]
    fn test_duplicate_stage_ids_collapse() {
        let mut dup = stages();
        dup.push(Stage::new(1, "New again", 9, EntityType::Vacancy));
        let grouping = StageGrouping::build(&dup, &items());
        assert_eq!(grouping.stage_ids(), &[1, 2, 3]);
    }
}
