//! View-model state types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which column the grid is sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by total word count.
    #[default]
    Words,
    /// Sort by regulation section count.
    Regulations,
    /// Sort by agency name, locale-style case-insensitive ordering.
    Agency,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => write!(f, "words"),
            Self::Regulations => write!(f, "regulations"),
            Self::Agency => write!(f, "agency"),
        }
    }
}

/// Sort direction. `Desc` reverses the natural ascending comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order (the default when a sort key is first selected).
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Fetch lifecycle of the snapshot: `Idle → Loading → {Loaded, Failed}`.
///
/// `Loading` is the skeleton-card state. `Failed` carries the
/// human-readable message shown in the error panel; recovery is a manual
/// retry that re-enters `Loading`. There is no automatic retry or backoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch has been issued yet.
    Idle,
    /// A fetch is in flight; placeholders are shown.
    Loading,
    /// The snapshot arrived and is ready to render.
    Loaded,
    /// The fetch failed; previous data has been discarded.
    Failed(String),
}

impl FetchState {
    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` once a snapshot has been loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Returns `true` if the last fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The error message, if the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Loading => write!(f, "loading"),
            Self::Loaded => write!(f, "loaded"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_serialization() {
        let json = serde_json::to_string(&SortKey::Regulations).unwrap();
        assert_eq!(json, "\"regulations\"");

        let key: SortKey = serde_json::from_str("\"agency\"").unwrap();
        assert_eq!(key, SortKey::Agency);
    }

    #[test]
    fn test_sort_key_default() {
        assert_eq!(SortKey::default(), SortKey::Words);
    }

    #[test]
    fn test_sort_direction_flipped() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }

    #[test]
    fn test_sort_direction_default_is_desc() {
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }

    #[test]
    fn test_fetch_state_predicates() {
        assert!(FetchState::Loading.is_loading());
        assert!(FetchState::Loaded.is_loaded());
        assert!(FetchState::Failed("x".into()).is_failed());
        assert!(!FetchState::Idle.is_loading());
        assert!(!FetchState::Idle.is_loaded());
        assert!(!FetchState::Idle.is_failed());
    }

    #[test]
    fn test_fetch_state_error_message() {
        let state = FetchState::Failed("server returned 500".to_string());
        assert_eq!(state.error_message(), Some("server returned 500"));
        assert_eq!(FetchState::Loaded.error_message(), None);
    }

    #[test]
    fn test_fetch_state_display() {
        assert_eq!(FetchState::Idle.to_string(), "idle");
        assert_eq!(FetchState::Loading.to_string(), "loading");
        assert_eq!(FetchState::Loaded.to_string(), "loaded");
        assert_eq!(
            FetchState::Failed("boom".to_string()).to_string(),
            "failed: boom"
        );
    }
}
