//! Name directory use-case service.
//!
//! # Responsibility
//! - Provide caller-facing entry points over a `NameRepository`.
//! - Compose full names from first/last input for `add_person`.
//! - Log mutation outcomes as metadata-only events.
//!
//! # Invariants
//! - Service APIs never bypass repository duplicate/not-found checks.
//! - Log lines never include name contents, only counts and status.

use crate::model::fixture::NameFixture;
use crate::model::full_name::{compose_full_name, NameFormatError};
use crate::repo::name_repo::{NameRepository, RepoError, RepoResult};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for composed-name use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameServiceError {
    /// First/last input could not form a full name.
    InvalidName(NameFormatError),
    /// Repository rejected the mutation.
    Repo(RepoError),
}

impl Display for NameServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(err) => write!(f, "invalid name: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NameServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidName(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<NameFormatError> for NameServiceError {
    fn from(value: NameFormatError) -> Self {
        Self::InvalidName(value)
    }
}

impl From<RepoError> for NameServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade over a name repository.
pub struct NameService<R: NameRepository> {
    repo: R,
}

impl<R: NameRepository> NameService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the wrapped repository.
    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Replaces all entries with the fixture content, in fixture order.
    pub fn load(&mut self, fixture: &NameFixture) {
        self.repo.set_all(&fixture.names);
        info!(
            "event=names_load module=name_service status=ok count={}",
            self.repo.size()
        );
    }

    /// Removes all entries.
    pub fn reset(&mut self) {
        self.repo.clear();
        info!("event=names_reset module=name_service status=ok");
    }

    pub fn count(&self) -> usize {
        self.repo.size()
    }

    pub fn list(&self) -> Vec<String> {
        self.repo.find_all()
    }

    /// Exports current entries as a fixture.
    pub fn snapshot(&self) -> NameFixture {
        NameFixture::new(self.repo.find_all())
    }

    /// Case-insensitive exact lookup; returns the stored casing.
    pub fn lookup(&self, full_name: &str) -> Option<String> {
        self.repo.find(full_name)
    }

    /// Adds one full name verbatim.
    pub fn register(&mut self, full_name: &str) -> RepoResult<()> {
        let result = self.repo.add(full_name);
        self.log_mutation("name_add", &result);
        result
    }

    /// Adds `"First Last"` built from two single-word tokens.
    ///
    /// Returns the stored full name on success.
    pub fn add_person(&mut self, first: &str, last: &str) -> Result<String, NameServiceError> {
        let full_name = compose_full_name(first, last).inspect_err(|_| {
            warn!("event=name_add module=name_service status=rejected reason=invalid_format");
        })?;
        self.register(&full_name)?;
        Ok(full_name)
    }

    /// Renames one entry, keeping its position.
    pub fn rename(&mut self, original: &str, updated_name: &str) -> RepoResult<()> {
        let result = self.repo.update(original, updated_name);
        self.log_mutation("name_update", &result);
        result
    }

    /// Removes one entry.
    pub fn unregister(&mut self, full_name: &str) -> RepoResult<()> {
        let result = self.repo.remove(full_name);
        self.log_mutation("name_remove", &result);
        result
    }

    pub fn search_by_first_name(&self, first_name: &str) -> Vec<String> {
        let hits = self.repo.find_by_first_name(first_name);
        debug!(
            "event=name_search module=name_service attribute=first hits={}",
            hits.len()
        );
        hits
    }

    pub fn search_by_last_name(&self, last_name: &str) -> Vec<String> {
        let hits = self.repo.find_by_last_name(last_name);
        debug!(
            "event=name_search module=name_service attribute=last hits={}",
            hits.len()
        );
        hits
    }

    fn log_mutation(&self, event: &str, result: &RepoResult<()>) {
        match result {
            Ok(()) => info!(
                "event={event} module=name_service status=ok count={}",
                self.repo.size()
            ),
            Err(err) => warn!(
                "event={event} module=name_service status=rejected reason={}",
                rejection_reason(err)
            ),
        }
    }
}

fn rejection_reason(err: &RepoError) -> &'static str {
    match err {
        RepoError::NotFound(_) => "not_found",
        RepoError::Duplicate(_) => "duplicate",
    }
}
