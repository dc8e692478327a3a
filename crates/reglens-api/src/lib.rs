//! # reglens-api
//!
//! HTTP API server for RegLens agency metrics.
//!
//! This crate provides the read-only REST surface over the metrics store:
//! - `GET /api/agencies` — the full snapshot, always complete, never partial
//! - `GET /api/agency/{name}` — single-agency detail
//! - `GET /api/top-agencies` — top N by word count
//! - `GET /api/health` — liveness report
//!
//! Store failures surface as 5xx JSON error bodies; the presentation layer
//! originates no writes through this API.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::{AppState, router};
pub use server::Server;
