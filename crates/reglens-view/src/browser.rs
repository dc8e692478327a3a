//! The agency grid view-model.
//!
//! [`AgencyBrowser`] owns the fetched snapshot and the transient UI state
//! (search term, sort key/direction, current page, fetch lifecycle) and
//! derives the visible page from them on demand.

use std::cmp::Ordering;

use reglens_core::{AgencyMetrics, Result};

use crate::types::{FetchState, SortDirection, SortKey};

/// Fixed number of cards per page.
pub const PAGE_SIZE: usize = 12;

/// View-model over one fetched snapshot of agency metrics.
///
/// The derivation runs sort → filter → paginate and is recomputed on every
/// call; nothing derived is cached. The snapshot is owned exclusively by
/// this instance and replaced wholesale on each successful fetch.
#[derive(Debug, Clone)]
pub struct AgencyBrowser {
    snapshot: Vec<AgencyMetrics>,
    search_term: String,
    sort_key: SortKey,
    sort_direction: SortDirection,
    current_page: usize,
    fetch_state: FetchState,
}

impl AgencyBrowser {
    /// Creates an idle browser with no data: word-count sort, descending,
    /// empty search, page 1.
    pub fn new() -> Self {
        Self {
            snapshot: Vec::new(),
            search_term: String::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            current_page: 1,
            fetch_state: FetchState::Idle,
        }
    }

    // ------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------

    /// The raw, unfiltered snapshot.
    pub fn snapshot(&self) -> &[AgencyMetrics] {
        &self.snapshot
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Active sort key.
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Active sort direction.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current fetch lifecycle state.
    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch_state
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// Enters the `Loading` state. Called when the fetch is issued,
    /// including manual retries after a failure.
    pub fn begin_fetch(&mut self) {
        self.fetch_state = FetchState::Loading;
    }

    /// Completes the in-flight fetch.
    ///
    /// On success the snapshot is replaced wholesale and the page resets
    /// to 1. On failure any previously loaded data is discarded and the
    /// error message is retained for the error panel.
    pub fn complete_fetch(&mut self, result: Result<Vec<AgencyMetrics>>) {
        match result {
            Ok(rows) => {
                self.snapshot = rows;
                self.fetch_state = FetchState::Loaded;
            }
            Err(err) => {
                self.snapshot.clear();
                self.fetch_state = FetchState::Failed(err.to_string());
            }
        }
        self.current_page = 1;
    }

    // ------------------------------------------------------------------
    // UI state transitions (each resets the page to 1)
    // ------------------------------------------------------------------

    /// Replaces the search term and resets to page 1.
    pub fn set_search_term<S: Into<String>>(&mut self, term: S) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Sets the sort key and direction explicitly and resets to page 1.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        self.current_page = 1;
    }

    /// Sort-control toggle rule: selecting the active key flips the
    /// direction; selecting a different key activates it descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Desc;
        }
        self.current_page = 1;
    }

    /// Moves to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        let last = self.page_count().max(1);
        self.current_page = page.clamp(1, last);
    }

    // ------------------------------------------------------------------
    // Derivation: sort → filter → paginate
    // ------------------------------------------------------------------

    /// The sorted, filtered collection the pages are cut from.
    pub fn derived(&self) -> Vec<AgencyMetrics> {
        let mut rows = self.snapshot.clone();
        rows.sort_by(|a, b| self.compare(a, b));

        if self.search_term.is_empty() {
            return rows;
        }
        let needle = self.search_term.to_lowercase();
        rows.retain(|m| m.name.to_lowercase().contains(&needle));
        rows
    }

    /// The slice of the derived collection visible on the current page.
    pub fn visible_page(&self) -> Vec<AgencyMetrics> {
        let start = (self.current_page - 1) * PAGE_SIZE;
        self.derived().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    /// Number of rows surviving the filter.
    pub fn filtered_len(&self) -> usize {
        self.derived().len()
    }

    /// Number of pages; zero for an empty filtered collection.
    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(PAGE_SIZE)
    }

    /// Pagination controls render only when there is more than one page
    /// worth of filtered rows.
    pub fn pagination_visible(&self) -> bool {
        self.filtered_len() > PAGE_SIZE
    }

    fn compare(&self, a: &AgencyMetrics, b: &AgencyMetrics) -> Ordering {
        let ascending = match self.sort_key {
            SortKey::Words => a.word_count.cmp(&b.word_count),
            SortKey::Regulations => a.section_count.cmp(&b.section_count),
            SortKey::Agency => compare_names(&a.name, &b.name),
        };
        match self.sort_direction {
            SortDirection::Asc => ascending,
            SortDirection::Desc => ascending.reverse(),
        }
    }
}

impl Default for AgencyBrowser {
    fn default() -> Self {
        Self::new()
    }
}

/// Locale-style name ordering: Unicode lowercase fold first, raw byte
/// order as tiebreak so the comparison stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reglens_core::Error;

    fn metric(name: &str, words: u64, sections: u64) -> AgencyMetrics {
        AgencyMetrics::new(name, words, sections).unwrap()
    }

    /// The scenario collection from the design notes:
    /// `[{A,500,10},{B,2_500_000,40},{C,900,5}]`.
    fn scenario_rows() -> Vec<AgencyMetrics> {
        vec![
            metric("A", 500, 10),
            metric("B", 2_500_000, 40),
            metric("C", 900, 5),
        ]
    }

    fn loaded_browser(rows: Vec<AgencyMetrics>) -> AgencyBrowser {
        let mut browser = AgencyBrowser::new();
        browser.begin_fetch();
        browser.complete_fetch(Ok(rows));
        browser
    }

    fn names(rows: &[AgencyMetrics]) -> Vec<&str> {
        rows.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let browser = AgencyBrowser::new();
        assert_eq!(browser.fetch_state(), &FetchState::Idle);
        assert_eq!(browser.current_page(), 1);
        assert_eq!(browser.sort_key(), SortKey::Words);
        assert_eq!(browser.sort_direction(), SortDirection::Desc);
        assert!(browser.snapshot().is_empty());
    }

    #[test]
    fn test_words_desc_scenario_order() {
        let browser = loaded_browser(scenario_rows());
        assert_eq!(names(&browser.derived()), vec!["B", "C", "A"]);

        let mut browser = browser;
        browser.set_sort(SortKey::Words, SortDirection::Asc);
        assert_eq!(names(&browser.derived()), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_regulations_sort() {
        let mut browser = loaded_browser(scenario_rows());
        browser.set_sort(SortKey::Regulations, SortDirection::Desc);
        assert_eq!(names(&browser.derived()), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_agency_sort_case_insensitive() {
        let mut browser = loaded_browser(vec![
            metric("delta", 1, 1),
            metric("Alpha", 2, 2),
            metric("charlie", 3, 3),
            metric("Bravo", 4, 4),
        ]);
        browser.set_sort(SortKey::Agency, SortDirection::Asc);
        assert_eq!(
            names(&browser.derived()),
            vec!["Alpha", "Bravo", "charlie", "delta"]
        );
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let mut browser = loaded_browser(vec![
            metric("Department of Agriculture", 1, 1),
            metric("Federal Reserve", 2, 2),
            metric("department of energy", 3, 3),
        ]);
        browser.set_search_term("DEPARTMENT");
        let derived = browser.derived();
        assert_eq!(derived.len(), 2);
        assert!(derived.iter().all(|m| m.name.to_lowercase().contains("department")));
    }

    #[test]
    fn test_filter_scenario_single_letter() {
        let mut browser = loaded_browser(scenario_rows());
        browser.set_search_term("a");
        assert_eq!(names(&browser.derived()), vec!["A"]);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let browser = loaded_browser(scenario_rows());
        assert_eq!(browser.filtered_len(), 3);
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let mut browser = loaded_browser(scenario_rows());
        assert_eq!(browser.sort_direction(), SortDirection::Desc);

        browser.toggle_sort(SortKey::Words);
        assert_eq!(browser.sort_key(), SortKey::Words);
        assert_eq!(browser.sort_direction(), SortDirection::Asc);

        browser.toggle_sort(SortKey::Words);
        assert_eq!(browser.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_toggle_new_key_starts_desc() {
        let mut browser = loaded_browser(scenario_rows());
        browser.toggle_sort(SortKey::Words); // now asc
        browser.toggle_sort(SortKey::Agency);
        assert_eq!(browser.sort_key(), SortKey::Agency);
        assert_eq!(browser.sort_direction(), SortDirection::Desc);
    }

    #[test]
    fn test_page_reset_on_state_changes() {
        let rows: Vec<_> = (0..30).map(|i| metric(&format!("Agency {i:02}"), i, i)).collect();
        let mut browser = loaded_browser(rows.clone());

        browser.set_page(3);
        assert_eq!(browser.current_page(), 3);
        browser.set_search_term("agency");
        assert_eq!(browser.current_page(), 1);

        browser.set_page(2);
        browser.toggle_sort(SortKey::Agency);
        assert_eq!(browser.current_page(), 1);

        browser.set_page(2);
        browser.set_sort(SortKey::Words, SortDirection::Asc);
        assert_eq!(browser.current_page(), 1);

        browser.set_page(2);
        browser.complete_fetch(Ok(rows));
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn test_pagination_slices() {
        let rows: Vec<_> = (0..30).map(|i| metric(&format!("Agency {i:02}"), i, i)).collect();
        let mut browser = loaded_browser(rows);
        browser.set_sort(SortKey::Agency, SortDirection::Asc);

        assert_eq!(browser.page_count(), 3);
        assert!(browser.pagination_visible());

        assert_eq!(browser.visible_page().len(), 12);
        assert_eq!(browser.visible_page()[0].name, "Agency 00");

        browser.set_page(3);
        let last = browser.visible_page();
        assert_eq!(last.len(), 6, "last page may be shorter");
        assert_eq!(last[5].name, "Agency 29");
    }

    #[test]
    fn test_set_page_clamps() {
        let rows: Vec<_> = (0..30).map(|i| metric(&format!("Agency {i:02}"), i, i)).collect();
        let mut browser = loaded_browser(rows);

        browser.set_page(99);
        assert_eq!(browser.current_page(), 3);
        browser.set_page(0);
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn test_empty_collection_zero_pages() {
        let browser = loaded_browser(Vec::new());
        assert!(browser.derived().is_empty());
        assert_eq!(browser.page_count(), 0);
        assert!(!browser.pagination_visible());
        assert!(browser.visible_page().is_empty());
    }

    #[test]
    fn test_exactly_one_page_hides_pagination() {
        let rows: Vec<_> = (0..12).map(|i| metric(&format!("A{i}"), i, i)).collect();
        let browser = loaded_browser(rows);
        assert_eq!(browser.page_count(), 1);
        assert!(!browser.pagination_visible());
    }

    #[test]
    fn test_failed_fetch_clears_data() {
        let mut browser = loaded_browser(scenario_rows());
        assert_eq!(browser.snapshot().len(), 3);

        browser.begin_fetch();
        assert!(browser.fetch_state().is_loading());

        browser.complete_fetch(Err(Error::fetch_failed("HTTP 500 Internal Server Error")));
        assert!(browser.fetch_state().is_failed());
        assert!(browser.snapshot().is_empty(), "failure discards loaded data");
        assert_eq!(browser.current_page(), 1);
        assert!(
            browser
                .fetch_state()
                .error_message()
                .unwrap()
                .contains("500")
        );
    }

    #[test]
    fn test_manual_retry_reenters_loading() {
        let mut browser = AgencyBrowser::new();
        browser.begin_fetch();
        browser.complete_fetch(Err(Error::fetch_failed("network down")));
        assert!(browser.fetch_state().is_failed());

        browser.begin_fetch();
        assert!(browser.fetch_state().is_loading());

        browser.complete_fetch(Ok(scenario_rows()));
        assert!(browser.fetch_state().is_loaded());
        assert_eq!(browser.snapshot().len(), 3);
    }
}
