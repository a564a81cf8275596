//! Test support: an in-memory backend stub and entity fixtures.

pub mod fixtures;
pub mod mocks;

pub use mocks::StubSource;
