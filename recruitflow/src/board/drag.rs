//! Drag gesture state machine.
//!
//! One gesture runs `idle -> dragging -> {committing -> idle, idle}`.
//! `committing` covers the window where the optimistic move has been
//! applied and the stage-update request is in flight; both the success
//! and failure paths settle back to `idle`.

use crate::models::{ItemId, StageId};

/// The coarse phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// An item is being dragged; nothing has been mutated yet.
    Dragging,
    /// A drop was accepted locally and the backend call is in flight.
    Committing,
}

/// The full gesture state, including what is being dragged where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// An item is held; `origin` is its stage captured at drag start.
    Dragging {
        /// The dragged item.
        item_id: ItemId,
        /// The item's stage when the drag began. Not re-read during the
        /// drag.
        origin: StageId,
    },
    /// The optimistic move is applied and the update request is pending.
    Committing {
        /// The dragged item.
        item_id: ItemId,
        /// The stage the item left.
        origin: StageId,
        /// The stage the item was dropped onto.
        dest: StageId,
    },
}

impl DragGesture {
    /// The coarse phase of the gesture.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Dragging { .. } => DragPhase::Dragging,
            Self::Committing { .. } => DragPhase::Committing,
        }
    }

    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The item involved in the current gesture, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<ItemId> {
        match self {
            Self::Idle => None,
            Self::Dragging { item_id, .. } | Self::Committing { item_id, .. } => Some(*item_id),
        }
    }

    /// Begins a gesture. Only legal from `Idle`; returns false otherwise.
    pub fn begin(&mut self, item_id: ItemId, origin: StageId) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Self::Dragging { item_id, origin };
        true
    }

    /// Moves a `Dragging` gesture into `Committing` toward a destination.
    ///
    /// Only legal while dragging; returns false and leaves the state
    /// untouched otherwise.
    pub fn commit(&mut self, dest: StageId) -> bool {
        match *self {
            Self::Dragging { item_id, origin } => {
                *self = Self::Committing {
                    item_id,
                    origin,
                    dest,
                };
                true
            }
            _ => false,
        }
    }

    /// Settles a `Committing` gesture back to `Idle` once the backend
    /// call has resolved, regardless of its outcome.
    pub fn settle(&mut self) {
        if matches!(self, Self::Committing { .. }) {
            *self = Self::Idle;
        }
    }

    /// Aborts the gesture from any state.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
