//! Pipeline stage configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StageId;

/// The kind of entity a pipeline stage applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A client company.
    Company,
    /// An open position at a company.
    Vacancy,
    /// A person in the candidate base.
    Candidate,
    /// A candidate's application to a vacancy.
    Application,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Company => write!(f, "company"),
            Self::Vacancy => write!(f, "vacancy"),
            Self::Candidate => write!(f, "candidate"),
            Self::Application => write!(f, "application"),
        }
    }
}

/// An ordered step in a pipeline.
///
/// Stages are fetched once per board render and treated as read-only
/// configuration; only the stage administration endpoints mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage identifier.
    pub id: StageId,
    /// Display name shown as the column title.
    pub name: String,
    /// Ordinal position among stages of the same entity type.
    pub order: u32,
    /// The entity type this stage applies to.
    pub entity_type: EntityType,
    /// Whether the stage is currently in use.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Whether the stage is terminal (hired, rejected, closed).
    #[serde(default)]
    pub is_final: bool,
}

fn default_active() -> bool {
    true
}

impl Stage {
    /// Creates a new active, non-terminal stage.
    #[must_use]
    pub fn new(id: StageId, name: impl Into<String>, order: u32, entity_type: EntityType) -> Self {
        Self {
            id,
            name: name.into(),
            order,
            entity_type,
            is_active: true,
            is_final: false,
        }
    }

    /// Marks the stage as terminal.
    #[must_use]
    pub fn terminal(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Marks the stage as inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Request body for creating a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCreateRequest {
    /// Display name.
    pub name: String,
    /// Ordinal position.
    pub order: u32,
    /// Entity type the stage applies to.
    pub entity_type: EntityType,
    /// Active flag; backend defaults to true when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Terminal flag; backend defaults to false when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,
}

/// Request body for updating a stage. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageUpdateRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New ordinal position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// New terminal flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entity_type_serialize() {
        let json = serde_json::to_string(&EntityType::Application).unwrap();
        assert_eq!(json, r#""application""#);

        let parsed: EntityType = serde_json::from_str(r#""vacancy""#).unwrap();
        assert_eq!(parsed, EntityType::Vacancy);
    }

    #[test]
    fn test_entity_type_display() {
        assert_eq!(EntityType::Company.to_string(), "company");
        assert_eq!(EntityType::Candidate.to_string(), "candidate");
    }

    #[test]
    fn test_stage_deserialize_defaults() {
        let stage: Stage = serde_json::from_str(
            r#"{"id": 3, "name": "Interview", "order": 2, "entity_type": "application"}"#,
        )
        .unwrap();

        assert_eq!(stage.name, "Interview");
        assert!(stage.is_active);
        assert!(!stage.is_final);
    }

    #[test]
    fn test_stage_builder() {
        let stage = Stage::new(7, "Hired", 5, EntityType::Application).terminal();
        assert!(stage.is_final);
        assert!(stage.is_active);
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let req = StageUpdateRequest {
            name: Some("Screening".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"name":"Screening"}"#);
    }
}
