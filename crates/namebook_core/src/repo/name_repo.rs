//! Name repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/find/update/remove and attribute search over full names.
//! - Own the entry sequence; hand out independent copies on every read.
//!
//! # Invariants
//! - No two entries compare equal under case-insensitive comparison, as long
//!   as mutations go through `add`/`update` (`set_all` trusts the caller).
//! - Insertion order is preserved; `update` keeps the slot, `remove` shifts
//!   later entries left by one.
//! - Failed mutations leave the collection untouched.

use crate::model::full_name::{eq_ignore_case, NameParts};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Rejection reasons for name mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Target of `update`/`remove` does not exist.
    NotFound(String),
    /// `add` target or `update` destination already exists.
    Duplicate(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "name not found: `{name}`"),
            Self::Duplicate(name) => write!(f, "name already exists: `{name}`"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for full-name collections.
pub trait NameRepository {
    /// Number of stored entries.
    fn size(&self) -> usize;
    /// Replaces the whole collection with a copy of `names`, without
    /// duplicate checks.
    fn set_all<S: AsRef<str>>(&mut self, names: &[S]);
    /// Removes every entry.
    fn clear(&mut self);
    /// Returns a copy of every entry in stored order.
    fn find_all(&self) -> Vec<String>;
    /// Returns the first entry equal to `full_name` ignoring case.
    fn find(&self, full_name: &str) -> Option<String>;
    /// Appends `full_name` unless an equal entry already exists.
    fn add(&mut self, full_name: &str) -> RepoResult<()>;
    /// Renames `original` to `updated_name` in place.
    fn update(&mut self, original: &str, updated_name: &str) -> RepoResult<()>;
    /// Removes the first entry equal to `full_name` ignoring case.
    fn remove(&mut self, full_name: &str) -> RepoResult<()>;
    /// Entries whose first part equals `first_name` ignoring case.
    fn find_by_first_name(&self, first_name: &str) -> Vec<String>;
    /// Entries whose last part equals `last_name` ignoring case.
    fn find_by_last_name(&self, last_name: &str) -> Vec<String>;
}

/// Which part of a full name an attribute search compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameAttribute {
    First,
    Last,
}

/// Ordered in-memory name store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameStore {
    entries: Vec<String>,
}

impl NameStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, full_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| eq_ignore_case(entry, full_name))
    }

    fn find_by_attribute(&self, attribute: NameAttribute, value: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| {
                let parts = NameParts::split(entry);
                let part = match attribute {
                    NameAttribute::First => Some(parts.first),
                    NameAttribute::Last => parts.last,
                };
                part.is_some_and(|part| eq_ignore_case(part, value))
            })
            .cloned()
            .collect()
    }
}

impl FromIterator<String> for NameStore {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl NameRepository for NameStore {
    fn size(&self) -> usize {
        self.entries.len()
    }

    fn set_all<S: AsRef<str>>(&mut self, names: &[S]) {
        self.entries = names.iter().map(|name| name.as_ref().to_owned()).collect();
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn find_all(&self) -> Vec<String> {
        self.entries.clone()
    }

    fn find(&self, full_name: &str) -> Option<String> {
        self.position(full_name)
            .map(|index| self.entries[index].clone())
    }

    fn add(&mut self, full_name: &str) -> RepoResult<()> {
        if self.position(full_name).is_some() {
            return Err(RepoError::Duplicate(full_name.to_string()));
        }

        self.entries.push(full_name.to_string());
        Ok(())
    }

    fn update(&mut self, original: &str, updated_name: &str) -> RepoResult<()> {
        let index = self
            .position(original)
            .ok_or_else(|| RepoError::NotFound(original.to_string()))?;

        // Also fires when `updated_name` matches `original` itself.
        if self.position(updated_name).is_some() {
            return Err(RepoError::Duplicate(updated_name.to_string()));
        }

        self.entries[index] = updated_name.to_string();
        Ok(())
    }

    fn remove(&mut self, full_name: &str) -> RepoResult<()> {
        let index = self
            .position(full_name)
            .ok_or_else(|| RepoError::NotFound(full_name.to_string()))?;

        self.entries.remove(index);
        Ok(())
    }

    fn find_by_first_name(&self, first_name: &str) -> Vec<String> {
        self.find_by_attribute(NameAttribute::First, first_name)
    }

    fn find_by_last_name(&self, last_name: &str) -> Vec<String> {
        self.find_by_attribute(NameAttribute::Last, last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::{NameRepository, NameStore, RepoError};

    fn store_with(names: &[&str]) -> NameStore {
        let mut store = NameStore::new();
        store.set_all(names);
        store
    }

    #[test]
    fn new_store_is_empty() {
        let store = NameStore::new();
        assert_eq!(store.size(), 0);
        assert!(store.find_all().is_empty());
    }

    #[test]
    fn position_returns_first_case_insensitive_match() {
        // Bulk load may carry duplicates; lookups resolve to the first one.
        let store = store_with(&["Ann Lee", "ANN LEE"]);
        assert_eq!(store.position("ann lee"), Some(0));
        assert_eq!(store.find("ann lee").as_deref(), Some("Ann Lee"));
    }

    #[test]
    fn update_to_itself_is_rejected() {
        let mut store = store_with(&["Jane Doe"]);
        let err = store
            .update("Jane Doe", "JANE DOE")
            .expect_err("renaming to itself collides with its own slot");
        assert_eq!(err, RepoError::Duplicate("JANE DOE".to_string()));
        assert_eq!(store.find_all(), vec!["Jane Doe".to_string()]);
    }

    #[test]
    fn error_display_names_the_entry() {
        assert_eq!(
            RepoError::NotFound("Ann Lee".to_string()).to_string(),
            "name not found: `Ann Lee`"
        );
        assert_eq!(
            RepoError::Duplicate("Ann Lee".to_string()).to_string(),
            "name already exists: `Ann Lee`"
        );
    }

    #[test]
    fn from_iterator_keeps_order() {
        let store: NameStore = ["B One", "A Two"].into_iter().map(String::from).collect();
        assert_eq!(store.find_all(), vec!["B One".to_string(), "A Two".to_string()]);
    }
}
