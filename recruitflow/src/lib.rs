//! # Recruitflow
//!
//! Headless client library for a recruiting-agency administrative
//! application: companies, vacancies, candidates, and applications
//! tracked through configurable pipeline stages.
//!
//! The centerpiece is the [`board::PipelineBoard`], a kanban-style board
//! that groups work items into stage columns and turns drag-and-drop
//! gestures into persisted stage changes:
//!
//! - **Derived grouping**: items are partitioned by stage, rebuilt
//!   wholesale on every fetch
//! - **Optimistic moves**: a drop mutates the local grouping first, then
//!   commits to the backend, resynchronizing wholesale on rejection
//! - **Explicit state machine**: one drag gesture runs
//!   `idle -> dragging -> committing -> idle` with no hidden reentrancy
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use recruitflow::prelude::*;
//! use std::sync::Arc;
//!
//! let client = RestClient::new(ApiConfig::new().with_base_url("https://crm.example.com/api"))?;
//! client.login("recruiter", "secret").await?;
//!
//! let mut board: ApplicationBoard<_> = PipelineBoard::new(client)
//!     .with_filter(ApplicationFilter::for_vacancy(42))
//!     .with_notifier(Arc::new(TracingNotifier));
//! board.load().await?;
//!
//! board.begin_drag(7);
//! board.drop_on(Some(interview_stage_id)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod api;
pub mod board;
pub mod errors;
pub mod models;
pub mod notify;
pub mod observability;
pub mod store;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::api::{ApiConfig, ItemSource, Session};
    pub use crate::board::{
        ApplicationBoard, BoardColumn, BoardState, DragGesture, DragPhase, DropOutcome,
        PipelineBoard, StageGrouping, VacancyBoard,
    };
    pub use crate::errors::{ApiError, BoardError};
    pub use crate::models::{
        Application, ApplicationFilter, BoardItem, Candidate, Company, EntityType, ItemId,
        Paginated, Stage, StageId, Vacancy, VacancyFilter,
    };
    pub use crate::notify::{
        CollectingNotifier, NoOpNotifier, Notifier, Severity, Toast, TracingNotifier,
    };
    pub use crate::store::BoardStore;

    #[cfg(feature = "rest")]
    pub use crate::api::RestClient;
}
