//! Candidates in the agency's base.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Language, Skill};

/// A person in the candidate base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate identifier.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Middle name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Region of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Education summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Link to the stored resume document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    /// Where the candidate came from (job board, referral, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Skills the candidate has.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Languages the candidate speaks.
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// Full display name: "Last First" with the middle name when present.
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.last_name, self.first_name, middle),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }
}

/// Request body for creating a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateCreateRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Middle name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Region of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Education summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Link to the stored resume document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    /// Where the candidate came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Request body for updating a candidate. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateUpdateRequest {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// New education summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// New resume link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    /// New source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(middle: Option<&str>) -> Candidate {
        Candidate {
            id: 1,
            first_name: "Anna".to_string(),
            last_name: "Petrova".to_string(),
            middle_name: middle.map(String::from),
            phone: None,
            email: None,
            region: None,
            education: None,
            resume_url: None,
            source: None,
            skills: Vec::new(),
            languages: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(candidate(None).full_name(), "Petrova Anna");
        assert_eq!(
            candidate(Some("Ivanovna")).full_name(),
            "Petrova Anna Ivanovna"
        );
    }
}
