//! The narrow backend interface the pipeline board consumes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{BoardItem, EntityType, ItemId, Stage, StageId};

/// Backend operations required to drive a pipeline board.
///
/// One implementation can serve several item kinds; [`crate::api::RestClient`]
/// implements it for both applications and vacancies. Tests use the
/// in-memory stub from [`crate::testing`].
#[async_trait]
pub trait ItemSource<I: BoardItem>: Send + Sync {
    /// Fetches the full stage list for an entity type.
    async fn list_stages(&self, entity_type: EntityType) -> Result<Vec<Stage>, ApiError>;

    /// Fetches the items matching a filter.
    async fn list_items(&self, filter: &I::Filter) -> Result<Vec<I>, ApiError>;

    /// Persists a stage change and returns the updated item.
    ///
    /// A rejection is surfaced to the caller as an error; the board treats
    /// it as "move rejected" and resynchronizes.
    async fn update_item_stage(&self, item_id: ItemId, new_stage_id: StageId)
        -> Result<I, ApiError>;
}

#[async_trait]
impl<I: BoardItem, T: ItemSource<I> + ?Sized> ItemSource<I> for Arc<T> {
    async fn list_stages(&self, entity_type: EntityType) -> Result<Vec<Stage>, ApiError> {
        (**self).list_stages(entity_type).await
    }

    async fn list_items(&self, filter: &I::Filter) -> Result<Vec<I>, ApiError> {
        (**self).list_items(filter).await
    }

    async fn update_item_stage(
        &self,
        item_id: ItemId,
        new_stage_id: StageId,
    ) -> Result<I, ApiError> {
        (**self).update_item_stage(item_id, new_stage_id).await
    }
}
