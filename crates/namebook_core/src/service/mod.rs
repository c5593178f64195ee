//! Core use-case services.
//!
//! # Responsibility
//! - Wrap repository calls into caller-facing use-case APIs.
//! - Emit metadata-only diagnostics for mutations.

pub mod name_service;
