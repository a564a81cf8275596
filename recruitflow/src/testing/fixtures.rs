//! Canned entities for tests and examples.

use chrono::{DateTime, Utc};

use crate::models::{
    Application, Candidate, EntityType, ItemId, Stage, StageId, Vacancy,
};

// 2025-06-01T09:00:00Z
fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_748_768_400, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// The default application pipeline: New, Interview, Offer, Hired.
#[must_use]
pub fn application_stages() -> Vec<Stage> {
    vec![
        Stage::new(1, "New", 1, EntityType::Application),
        Stage::new(2, "Interview", 2, EntityType::Application),
        Stage::new(3, "Offer", 3, EntityType::Application),
        Stage::new(4, "Hired", 4, EntityType::Application).terminal(),
    ]
}

/// The default vacancy pipeline: New, Sourcing, Shortlist, Closed.
#[must_use]
pub fn vacancy_stages() -> Vec<Stage> {
    vec![
        Stage::new(1, "New", 1, EntityType::Vacancy),
        Stage::new(2, "Sourcing", 2, EntityType::Vacancy),
        Stage::new(3, "Shortlist", 3, EntityType::Vacancy),
        Stage::new(4, "Closed", 4, EntityType::Vacancy).terminal(),
    ]
}

/// A candidate with deterministic payload fields.
#[must_use]
pub fn candidate(id: i64) -> Candidate {
    Candidate {
        id,
        first_name: "Anna".to_string(),
        last_name: format!("Candidate{id}"),
        middle_name: None,
        phone: Some("+1-555-0100".to_string()),
        email: Some(format!("candidate{id}@example.com")),
        region: Some("Remote".to_string()),
        education: None,
        resume_url: None,
        source: Some("referral".to_string()),
        skills: Vec::new(),
        languages: Vec::new(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// A vacancy placed in the given stage (or unplaced when `None`).
#[must_use]
pub fn vacancy(id: ItemId, stage: Option<StageId>) -> Vacancy {
    Vacancy {
        id,
        title: format!("Vacancy {id}"),
        salary_amount: Some(120_000),
        salary_currency: Some("USD".to_string()),
        description: None,
        current_stage_id: stage,
        is_active: true,
        company_id: Some(1),
        skills: Vec::new(),
        languages: Vec::new(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

/// An application placed in the given stage (or unplaced when `None`).
#[must_use]
pub fn application(id: ItemId, stage: Option<StageId>) -> Application {
    Application {
        id,
        candidate_id: id + 100,
        vacancy_id: id + 200,
        current_stage_id: stage,
        candidate: candidate(id + 100),
        vacancy: vacancy(id + 200, None),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}
