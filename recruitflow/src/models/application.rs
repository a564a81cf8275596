//! Candidate applications tracked through the application pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Candidate, StageId, Vacancy};

/// A candidate's application to a vacancy.
///
/// Carries the full candidate and vacancy payloads for card display; the
/// board itself only reads `id` and `current_stage_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Application identifier.
    pub id: i64,
    /// Applying candidate's identifier.
    pub candidate_id: i64,
    /// Target vacancy's identifier.
    pub vacancy_id: i64,
    /// Current pipeline stage; null when not yet placed on the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage_id: Option<StageId>,
    /// The applying candidate, embedded for display.
    pub candidate: Candidate,
    /// The target vacancy, embedded for display.
    pub vacancy: Vacancy,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreateRequest {
    /// Applying candidate.
    pub candidate_id: i64,
    /// Target vacancy.
    pub vacancy_id: i64,
    /// Initial pipeline stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage_id: Option<StageId>,
}

/// Request body for updating an application.
///
/// The only mutable field is the current stage; everything else is derived
/// from the candidate and vacancy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationUpdateRequest {
    /// New pipeline stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage_id: Option<StageId>,
}

impl ApplicationUpdateRequest {
    /// Builds an update that moves the application to a new stage.
    #[must_use]
    pub fn stage_move(stage_id: StageId) -> Self {
        Self {
            current_stage_id: Some(stage_id),
        }
    }
}
