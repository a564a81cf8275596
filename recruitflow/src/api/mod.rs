//! Backend API surface.
//!
//! The board depends only on the [`ItemSource`] trait; the reqwest-based
//! [`RestClient`] (behind the `rest` feature) is the production
//! implementation, covering the full administrative surface of the
//! backend alongside the board's three operations.

mod config;
mod source;

#[cfg(feature = "rest")]
mod auth;
#[cfg(feature = "rest")]
mod rest;

pub use config::{ApiConfig, Session};
pub use source::ItemSource;

#[cfg(feature = "rest")]
pub use rest::RestClient;
