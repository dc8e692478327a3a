//! # reglens-core
//!
//! Shared types, errors, and invariants for the RegLens workspace.
//!
//! This crate provides the foundational types used across all RegLens crates.
//! It has no internal RegLens dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`types`]: Agency metrics domain types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use types::{AgencyMetrics, AgencyRecord, HealthReport, Snapshot};
