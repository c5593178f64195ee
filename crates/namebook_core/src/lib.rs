//! Core domain logic for the name directory.
//! This crate is the single source of truth for name-store invariants.

pub mod fixture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use fixture::{load_fixture, parse_fixture, FixtureError, FixtureResult};
pub use logging::{init_logging, LogConfig, LogLevel, LoggingError};
pub use model::fixture::NameFixture;
pub use model::full_name::{compose_full_name, eq_ignore_case, NameFormatError, NameParts};
pub use repo::name_repo::{NameRepository, NameStore, RepoError, RepoResult};
pub use service::name_service::{NameService, NameServiceError};

/// Minimal health-check API for caller wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
