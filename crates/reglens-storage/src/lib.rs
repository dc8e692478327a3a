//! # reglens-storage
//!
//! SQLite-backed metrics store for RegLens.
//!
//! This crate owns the `agency_metrics` table and the read queries the
//! API serves from:
//! - Full-snapshot listing (the `/api/agencies` backing query)
//! - Single-agency lookup
//! - Top-N by word count
//! - Aggregate statistics (average section length)
//!
//! Writes happen only through [`MetricsStore::upsert_agency`], the seam the
//! external ingestion process (and test fixtures) populate rows through.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod store;

pub use store::MetricsStore;
