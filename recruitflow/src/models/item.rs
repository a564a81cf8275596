//! The board item abstraction shared by both board flavors.

use super::{
    Application, ApplicationFilter, EntityType, ItemId, StageId, Vacancy, VacancyFilter,
};

/// A work item that can be placed on a pipeline board.
///
/// Implemented by [`Application`] and [`Vacancy`]. The board only ever
/// reads the identifier and stage reference; everything else on the item
/// is display payload it carries around untouched.
pub trait BoardItem: Clone + Send + Sync + 'static {
    /// Filter type accepted by the list endpoint for this item kind.
    type Filter: Clone + Default + Send + Sync;

    /// The item's identifier.
    fn item_id(&self) -> ItemId;

    /// The item's current stage, if it has been placed in the pipeline.
    fn stage_id(&self) -> Option<StageId>;

    /// Replaces the item's current stage reference.
    fn assign_stage(&mut self, stage_id: Option<StageId>);

    /// The entity type whose stage list drives this item's board.
    fn entity_type() -> EntityType;
}

impl BoardItem for Application {
    type Filter = ApplicationFilter;

    fn item_id(&self) -> ItemId {
        self.id
    }

    fn stage_id(&self) -> Option<StageId> {
        self.current_stage_id
    }

    fn assign_stage(&mut self, stage_id: Option<StageId>) {
        self.current_stage_id = stage_id;
    }

    fn entity_type() -> EntityType {
        EntityType::Application
    }
}

impl BoardItem for Vacancy {
    type Filter = VacancyFilter;

    fn item_id(&self) -> ItemId {
        self.id
    }

    fn stage_id(&self) -> Option<StageId> {
        self.current_stage_id
    }

    fn assign_stage(&mut self, stage_id: Option<StageId>) {
        self.current_stage_id = stage_id;
    }

    fn entity_type() -> EntityType {
        EntityType::Vacancy
    }
}
