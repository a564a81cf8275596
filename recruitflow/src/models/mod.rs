//! Wire-level data model for the recruiting backend.
//!
//! All types here mirror the backend's JSON shapes. The backend is the
//! authoritative owner of every entity; this crate only holds working
//! copies for display and board manipulation.

mod application;
mod candidate;
mod catalog;
mod comment;
mod company;
mod filters;
mod item;
mod stage;
mod user;
mod vacancy;

pub use application::{Application, ApplicationCreateRequest, ApplicationUpdateRequest};
pub use candidate::{Candidate, CandidateCreateRequest, CandidateUpdateRequest};
pub use catalog::{Language, LanguageCreateRequest, Skill, SkillCreateRequest};
pub use comment::{Comment, CommentCreateRequest, Notification, Reminder, ReminderCreateRequest};
pub use company::{
    Company, CompanyCreateRequest, CompanyList, CompanyRepresentative,
    CompanyRepresentativeCreateRequest, CompanyUpdateRequest,
};
pub use filters::{
    ApplicationFilter, CandidateFilter, CompanyFilter, Paginated, Pagination, SortOrder,
    VacancyFilter,
};
pub use item::BoardItem;
pub use stage::{EntityType, Stage, StageCreateRequest, StageUpdateRequest};
pub use user::{LoginRequest, Token, User};
pub use vacancy::{Vacancy, VacancyCreateRequest, VacancyUpdateRequest};

/// Identifier of a pipeline stage.
pub type StageId = i64;

/// Identifier of a work item (application or vacancy) on a board.
pub type ItemId = i64;
