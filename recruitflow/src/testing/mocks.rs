//! In-memory backend stub that records calls and can be told to fail.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::api::ItemSource;
use crate::errors::ApiError;
use crate::models::{BoardItem, EntityType, ItemId, Stage, StageId};

/// An in-memory [`ItemSource`] holding the "backend truth" for tests.
///
/// Successful stage updates mutate the stored items, so a later
/// `list_items` reflects the confirmed move; failed updates leave the
/// stored items untouched, so a re-fetch returns the pre-move state.
#[derive(Debug)]
pub struct StubSource<I> {
    stages: Mutex<Vec<Stage>>,
    items: Mutex<Vec<I>>,
    fail_list_stages: Mutex<bool>,
    fail_list_items: Mutex<bool>,
    fail_update: Mutex<bool>,
    stage_list_calls: Mutex<usize>,
    item_list_calls: Mutex<usize>,
    update_calls: Mutex<Vec<(ItemId, StageId)>>,
}

impl<I: BoardItem> StubSource<I> {
    /// Creates a stub with the given backend state.
    #[must_use]
    pub fn new(stages: Vec<Stage>, items: Vec<I>) -> Self {
        Self {
            stages: Mutex::new(stages),
            items: Mutex::new(items),
            fail_list_stages: Mutex::new(false),
            fail_list_items: Mutex::new(false),
            fail_update: Mutex::new(false),
            stage_list_calls: Mutex::new(0),
            item_list_calls: Mutex::new(0),
            update_calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes subsequent stage-list calls fail.
    pub fn fail_list_stages(&self, fail: bool) {
        *self.fail_list_stages.lock() = fail;
    }

    /// Makes subsequent item-list calls fail.
    pub fn fail_list_items(&self, fail: bool) {
        *self.fail_list_items.lock() = fail;
    }

    /// Makes subsequent stage updates fail.
    pub fn fail_update(&self, fail: bool) {
        *self.fail_update.lock() = fail;
    }

    /// Number of stage-list calls seen.
    #[must_use]
    pub fn stage_list_calls(&self) -> usize {
        *self.stage_list_calls.lock()
    }

    /// Number of item-list calls seen.
    #[must_use]
    pub fn item_list_calls(&self) -> usize {
        *self.item_list_calls.lock()
    }

    /// Recorded `(item_id, new_stage_id)` pairs from update calls.
    #[must_use]
    pub fn update_calls(&self) -> Vec<(ItemId, StageId)> {
        self.update_calls.lock().clone()
    }

    /// Replaces the stored backend items.
    pub fn set_items(&self, items: Vec<I>) {
        *self.items.lock() = items;
    }

    /// A copy of the stored backend items.
    #[must_use]
    pub fn backend_items(&self) -> Vec<I> {
        self.items.lock().clone()
    }
}

#[async_trait]
impl<I: BoardItem> ItemSource<I> for StubSource<I> {
    async fn list_stages(&self, _entity_type: EntityType) -> Result<Vec<Stage>, ApiError> {
        *self.stage_list_calls.lock() += 1;
        if *self.fail_list_stages.lock() {
            return Err(ApiError::rejected(500, "stage list unavailable"));
        }
        Ok(self.stages.lock().clone())
    }

    async fn list_items(&self, _filter: &I::Filter) -> Result<Vec<I>, ApiError> {
        *self.item_list_calls.lock() += 1;
        if *self.fail_list_items.lock() {
            return Err(ApiError::rejected(500, "item list unavailable"));
        }
        Ok(self.items.lock().clone())
    }

    async fn update_item_stage(
        &self,
        item_id: ItemId,
        new_stage_id: StageId,
    ) -> Result<I, ApiError> {
        self.update_calls.lock().push((item_id, new_stage_id));
        if *self.fail_update.lock() {
            return Err(ApiError::rejected(422, "stage transition rejected"));
        }
        let mut items = self.items.lock();
        let Some(item) = items.iter_mut().find(|i| i.item_id() == item_id) else {
            return Err(ApiError::rejected(404, "item not found"));
        };
        item.assign_stage(Some(new_stage_id));
        Ok(item.clone())
    }
}
