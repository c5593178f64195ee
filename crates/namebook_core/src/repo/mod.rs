//! Repository layer for the name directory.
//!
//! # Responsibility
//! - Define the data access contract for full-name collections.
//! - Keep storage details away from service orchestration.
//!
//! # Invariants
//! - Mutations report `NotFound`/`Duplicate` instead of panicking.
//! - Reads never expose references into internal storage.

pub mod name_repo;
