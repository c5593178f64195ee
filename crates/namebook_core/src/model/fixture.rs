//! Bulk-load fixture model.
//!
//! # Invariants
//! - `names` keeps caller order; no deduplication happens here.

use serde::{Deserialize, Serialize};

/// Ordered set of full names used to seed or export a name store.
///
/// Serialized as `{"names": ["Jane Doe", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFixture {
    #[serde(default)]
    pub names: Vec<String>,
}

impl NameFixture {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for NameFixture {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
