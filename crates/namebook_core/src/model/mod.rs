//! Domain model for the name directory.
//!
//! # Responsibility
//! - Define how a stored full name is interpreted (first/last parts).
//! - Define the bulk-load fixture shape shared by callers and services.
//!
//! # Invariants
//! - A stored entry is an opaque string; parsing never rejects it.

pub mod fixture;
pub mod full_name;
