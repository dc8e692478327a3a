//! Agency metrics domain types.
//!
//! The sole entity in the data model is [`AgencyMetrics`]: one row per
//! agency with precomputed word and section counts. Rows are produced by an
//! external ingestion process and are read-only from this system's
//! perspective.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};

/// Precomputed statistics for one federal agency.
///
/// `name` is the unique identifier and display label within a snapshot.
/// Counts are non-negative by construction (`u64`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyMetrics {
    /// Agency name, unique within a snapshot
    pub name: String,

    /// Total words across the agency's regulatory text
    pub word_count: u64,

    /// Total regulation sections attributed to the agency
    pub section_count: u64,
}

impl AgencyMetrics {
    /// Creates a validated metrics row.
    ///
    /// # Examples
    ///
    /// ```
    /// use reglens_core::AgencyMetrics;
    ///
    /// let row = AgencyMetrics::new("Department of Energy", 120_000, 340).unwrap();
    /// assert_eq!(row.section_count, 340);
    /// ```
    pub fn new<S: Into<String>>(name: S, word_count: u64, section_count: u64) -> Result<Self> {
        let row = Self {
            name: name.into(),
            word_count,
            section_count,
        };
        row.validate()?;
        Ok(row)
    }

    /// Checks the data model invariants for this row.
    ///
    /// Counts cannot go negative by construction, so the only checkable
    /// invariant on a single row is a non-empty name.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_field("name", "must not be empty"));
        }
        Ok(())
    }
}

/// A complete set of agency metrics returned by one query.
///
/// Assumed internally consistent at read time: names are unique and every
/// row satisfies the [`AgencyMetrics`] invariants. There is no incremental
/// delta protocol; a snapshot is always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<AgencyMetrics>);

impl Snapshot {
    /// Creates a validated snapshot from a collection of rows.
    ///
    /// Fails with a validation error when a row is invalid or a name
    /// appears more than once.
    pub fn new(rows: Vec<AgencyMetrics>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            row.validate()?;
            if !seen.insert(row.name.as_str()) {
                return Err(Error::validation_field(
                    "name",
                    format!("duplicate agency name: {}", row.name),
                ));
            }
        }
        Ok(Self(rows))
    }

    /// Creates an empty snapshot.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the rows as a slice.
    pub fn as_slice(&self) -> &[AgencyMetrics] {
        &self.0
    }

    /// Consumes the snapshot, returning the rows.
    pub fn into_inner(self) -> Vec<AgencyMetrics> {
        self.0
    }

    /// Number of agencies in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the snapshot contains no agencies.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a AgencyMetrics;
    type IntoIter = std::slice::Iter<'a, AgencyMetrics>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A stored agency row with its refresh timestamp.
///
/// Returned by the single-agency detail lookup; the list endpoint returns
/// bare [`AgencyMetrics`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyRecord {
    /// The metrics themselves
    #[serde(flatten)]
    pub metrics: AgencyMetrics,

    /// When the row was last written by the ingestion process
    pub updated_at: DateTime<Utc>,
}

/// Service health report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Health status label, `"healthy"` when the service is up
    pub status: String,

    /// Server-side timestamp of the report
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    /// Creates a healthy report stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
