//! # reglens-view
//!
//! Presentation view-model for the RegLens agency card grid.
//!
//! The view-model owns one fetched snapshot plus transient UI state and
//! derives the currently visible page from them:
//! - Case-insensitive substring search over agency names
//! - Multi-key sorting (word count, section count, agency name)
//! - Fixed-size pagination (12 cards per page)
//! - A three-state fetch lifecycle (`Loading` → `Loaded` / `Failed`)
//!
//! The derived list is recomputed on every state change, never cached;
//! this sidesteps the invalidation hazards of memoizing it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod browser;
pub mod format;
pub mod types;

mod proptests;

pub use browser::{AgencyBrowser, PAGE_SIZE};
pub use format::format_count;
pub use types::{FetchState, SortDirection, SortKey};
