//! Client companies and their representatives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Vacancy;

/// A client company the agency recruits for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Company identifier.
    pub id: i64,
    /// Trading name.
    pub name: String,
    /// Registered legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    /// Field of activity / industry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_field: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Contact persons at the company.
    #[serde(default)]
    pub representatives: Vec<CompanyRepresentative>,
    /// Vacancies opened by the company.
    #[serde(default)]
    pub vacancies: Vec<Vacancy>,
}

/// A contact person at a client company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRepresentative {
    /// Representative identifier.
    pub id: i64,
    /// Owning company identifier.
    pub company_id: i64,
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
}

/// Request body for creating a company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyCreateRequest {
    /// Trading name.
    pub name: String,
    /// Registered legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    /// Field of activity / industry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_field: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Request body for updating a company. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyUpdateRequest {
    /// New trading name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    /// New field of activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_field: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New logo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Request body for creating a company representative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyRepresentativeCreateRequest {
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
}

/// Company list response; the companies endpoint does not use the common
/// paginated envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyList {
    /// Companies on this page.
    pub data: Vec<Company>,
    /// Total number of companies matching the filter.
    pub total: u64,
}
