//! List filters and the common paginated response envelope.
//!
//! Filters serialize straight into query strings; `None` fields are
//! omitted so the backend applies its defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ItemId, StageId};

/// A page of results in the backend's common list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of matching items.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Total number of pages.
    pub pages: u32,
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Common pagination parameters, flattened into every filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Maximum items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the result set; an alternative to `page`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Filter for listing applications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationFilter {
    /// Restrict to one candidate's applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<ItemId>,
    /// Restrict to one vacancy's applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_id: Option<ItemId>,
    /// Restrict to applications currently in one stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<StageId>,
    /// Restrict to applications for one company's vacancies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Pagination parameters.
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApplicationFilter {
    /// Filter for one vacancy's board.
    #[must_use]
    pub fn for_vacancy(vacancy_id: ItemId) -> Self {
        Self {
            vacancy_id: Some(vacancy_id),
            ..Self::default()
        }
    }

    /// Filter for one candidate's board.
    #[must_use]
    pub fn for_candidate(candidate_id: ItemId) -> Self {
        Self {
            candidate_id: Some(candidate_id),
            ..Self::default()
        }
    }

    /// Filter for one company's board.
    #[must_use]
    pub fn for_company(company_id: i64) -> Self {
        Self {
            company_id: Some(company_id),
            ..Self::default()
        }
    }
}

/// Filter for listing vacancies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VacancyFilter {
    /// Restrict to one company's vacancies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    /// Restrict by active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Pagination parameters.
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl VacancyFilter {
    /// Filter for one company's active vacancies, the default board view.
    #[must_use]
    pub fn active_for_company(company_id: i64) -> Self {
        Self {
            company_id: Some(company_id),
            is_active: Some(true),
            ..Self::default()
        }
    }
}

/// Filter for listing candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict by region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Pagination parameters.
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Filter for listing companies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyFilter {
    /// Free-text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict to companies with at least one active vacancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_active_vacancies: Option<bool>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// Pagination parameters.
    #[serde(flatten)]
    pub pagination: Pagination,
}
