//! Open positions tracked through the vacancy pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Language, Skill, StageId};

/// An open position at a client company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Vacancy identifier.
    pub id: i64,
    /// Position title.
    pub title: String,
    /// Offered salary amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_amount: Option<i64>,
    /// Salary currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current pipeline stage; null when not yet placed on the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage_id: Option<StageId>,
    /// Whether the vacancy is still open.
    pub is_active: bool,
    /// Owning company, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    /// Required skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Required languages.
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a vacancy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyCreateRequest {
    /// Position title.
    pub title: String,
    /// Offered salary amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_amount: Option<i64>,
    /// Salary currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial pipeline stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage_id: Option<StageId>,
    /// Active flag; backend defaults to true when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Owning company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

/// Request body for updating a vacancy. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyUpdateRequest {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New salary amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_amount: Option<i64>,
    /// New salary currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New pipeline stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stage_id: Option<StageId>,
    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl VacancyUpdateRequest {
    /// Builds an update that only moves the vacancy to a new stage.
    #[must_use]
    pub fn stage_move(stage_id: StageId) -> Self {
        Self {
            current_stage_id: Some(stage_id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stage_move_serializes_only_stage() {
        let req = VacancyUpdateRequest::stage_move(4);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"current_stage_id":4}"#);
    }

    #[test]
    fn test_vacancy_deserialize_null_stage() {
        let vacancy: Vacancy = serde_json::from_str(
            r#"{
                "id": 9,
                "title": "Backend Engineer",
                "is_active": true,
                "created_at": "2025-02-01T12:00:00Z",
                "updated_at": "2025-02-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(vacancy.current_stage_id, None);
        assert!(vacancy.skills.is_empty());
    }
}
