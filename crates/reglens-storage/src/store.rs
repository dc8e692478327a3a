//! Metrics store implementation.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};

use reglens_core::{AgencyMetrics, AgencyRecord, Error, Result, Snapshot};

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS agency_metrics (
    id            INTEGER PRIMARY KEY,
    name          TEXT NOT NULL UNIQUE,
    word_count    INTEGER NOT NULL DEFAULT 0,
    section_count INTEGER NOT NULL DEFAULT 0,
    updated_at    TEXT NOT NULL
)";

/// SQLite-backed store of precomputed agency metrics.
///
/// All reads are single non-transactional queries; the system performs no
/// concurrent writes of its own.
#[derive(Clone, Debug)]
pub struct MetricsStore {
    pool: SqlitePool,
}

impl MetricsStore {
    /// Opens (creating if missing) the database at `database_url` and
    /// ensures the schema exists.
    ///
    /// Connection failure is surfaced as [`Error::StoreUnavailable`].
    pub async fn open(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| Error::store_unavailable_with_source("invalid database URL", e))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| {
                Error::store_unavailable_with_source(
                    format!("cannot connect to {database_url}"),
                    e,
                )
            })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        tracing::info!(url = %database_url, "metrics store opened");
        Ok(store)
    }

    /// Opens an in-memory store, mainly for tests and demos.
    ///
    /// The pool is pinned to a single long-lived connection: each new
    /// `:memory:` connection would otherwise see its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| Error::store_unavailable_with_source("invalid memory URL", e))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| Error::store_unavailable_with_source("cannot open memory store", e))?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Returns the complete snapshot of agency metrics.
    ///
    /// Every row is validated against the data model invariants before the
    /// snapshot is handed out; row order is not contractually meaningful.
    pub async fn list_agencies(&self) -> Result<Snapshot> {
        let rows = sqlx::query(
            "SELECT name, word_count, section_count FROM agency_metrics ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        let metrics = rows
            .iter()
            .map(row_to_metrics)
            .collect::<Result<Vec<_>>>()?;
        Snapshot::new(metrics)
    }

    /// Looks up a single agency by name, with its refresh timestamp.
    pub async fn get_agency(&self, name: &str) -> Result<AgencyRecord> {
        let row = sqlx::query(
            "SELECT name, word_count, section_count, updated_at \
             FROM agency_metrics WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or_else(|| Error::AgencyNotFound {
            name: name.to_string(),
        })?;

        let metrics = row_to_metrics(&row)?;
        let updated_at: String = row.try_get("updated_at")?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|e| {
                Error::validation_field("updated_at", format!("bad timestamp in store: {e}"))
            })?
            .with_timezone(&Utc);

        Ok(AgencyRecord {
            metrics,
            updated_at,
        })
    }

    /// Returns the `limit` agencies with the highest word counts,
    /// descending.
    pub async fn top_agencies(&self, limit: u32) -> Result<Vec<AgencyMetrics>> {
        let rows = sqlx::query(
            "SELECT name, word_count, section_count FROM agency_metrics \
             ORDER BY word_count DESC LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_metrics).collect()
    }

    /// Average words per section across all agencies.
    ///
    /// Returns 0.0 when the store holds no sections at all.
    pub async fn average_section_length(&self) -> Result<f64> {
        let row = sqlx::query(
            "SELECT SUM(word_count) AS words, SUM(section_count) AS sections \
             FROM agency_metrics",
        )
        .fetch_one(&self.pool)
        .await?;

        let words: Option<i64> = row.try_get("words")?;
        let sections: Option<i64> = row.try_get("sections")?;
        match (words, sections) {
            (Some(w), Some(s)) if s > 0 => Ok(w as f64 / s as f64),
            _ => Ok(0.0),
        }
    }

    /// Inserts or replaces one agency row, keyed by name.
    ///
    /// This is the write seam the external ingestion process goes through;
    /// nothing in the query/presentation pipeline calls it.
    pub async fn upsert_agency(&self, metrics: &AgencyMetrics) -> Result<()> {
        metrics.validate()?;

        sqlx::query(
            "INSERT INTO agency_metrics (name, word_count, section_count, updated_at) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT(name) DO UPDATE SET \
               word_count = excluded.word_count, \
               section_count = excluded.section_count, \
               updated_at = excluded.updated_at",
        )
        .bind(&metrics.name)
        .bind(metrics.word_count as i64)
        .bind(metrics.section_count as i64)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Number of agency rows currently stored.
    pub async fn agency_count(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM agency_metrics")
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.try_get("n")?;
        Ok(n as u64)
    }
}

/// Converts a stored row into a validated domain row.
///
/// Counts are stored as SQLite INTEGER; a negative value means the store
/// was corrupted by something outside this system and is rejected.
fn row_to_metrics(row: &SqliteRow) -> Result<AgencyMetrics> {
    let name: String = row.try_get("name")?;
    let word_count: i64 = row.try_get("word_count")?;
    let section_count: i64 = row.try_get("section_count")?;

    let word_count = u64::try_from(word_count)
        .map_err(|_| Error::validation_field("word_count", "negative count in store"))?;
    let section_count = u64::try_from(section_count)
        .map_err(|_| Error::validation_field("section_count", "negative count in store"))?;

    AgencyMetrics::new(name, word_count, section_count)
}
