//! Repository for the `usage_counters` collection.
//!
//! Counters are keyed by `mood_label` through a unique index, which is what
//! lets [`UsageStatsRepo::record_access`] be a single atomic upsert instead
//! of a racy read-increment-write pair.

use sqlx::PgPool;

use crate::models::usage::UsageCounter;

/// Column list for `usage_counters` queries.
const COUNTER_COLUMNS: &str = "\
    id, mood_label, access_count, last_accessed_at, \
    created_at, updated_at";

/// Provides access to per-mood usage counters.
pub struct UsageStatsRepo;

impl UsageStatsRepo {
    /// List all counters, most-used first. Ties are unordered.
    pub async fn list(pool: &PgPool) -> Result<Vec<UsageCounter>, sqlx::Error> {
        let query =
            format!("SELECT {COUNTER_COLUMNS} FROM usage_counters ORDER BY access_count DESC");
        sqlx::query_as::<_, UsageCounter>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the counter for a label, if one exists.
    pub async fn find_by_label(
        pool: &PgPool,
        label: &str,
    ) -> Result<Option<UsageCounter>, sqlx::Error> {
        let query = format!("SELECT {COUNTER_COLUMNS} FROM usage_counters WHERE mood_label = $1");
        sqlx::query_as::<_, UsageCounter>(&query)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// Atomically increment the counter for a label, creating it with a
    /// count of 1 if absent.
    ///
    /// This must stay a single statement: concurrent calls for the same
    /// label serialize on the unique index, so no increment is ever lost.
    pub async fn record_access(pool: &PgPool, label: &str) -> Result<UsageCounter, sqlx::Error> {
        let query = format!(
            "INSERT INTO usage_counters (mood_label, access_count, last_accessed_at) \
             VALUES ($1, 1, now()) \
             ON CONFLICT (mood_label) \
             DO UPDATE SET access_count = usage_counters.access_count + 1, \
                           last_accessed_at = now(), \
                           updated_at = now() \
             RETURNING {COUNTER_COLUMNS}"
        );
        sqlx::query_as::<_, UsageCounter>(&query)
            .bind(label)
            .fetch_one(pool)
            .await
    }

    /// Create a zero-count counter for a label if none exists yet.
    ///
    /// Used at mood-creation time; an existing counter (for example one
    /// left behind by an earlier entry with the same label) is kept as-is.
    pub async fn ensure_counter(pool: &PgPool, label: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO usage_counters (mood_label) VALUES ($1) \
             ON CONFLICT (mood_label) DO NOTHING",
        )
        .bind(label)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Rewrite the label of the counter matching `old_label`.
    ///
    /// A missing counter is a silent no-op: counters are best-effort and
    /// may lag behind the catalog.
    pub async fn rename(pool: &PgPool, old_label: &str, new_label: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE usage_counters SET mood_label = $2, updated_at = now() \
             WHERE mood_label = $1",
        )
        .bind(old_label)
        .bind(new_label)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove the counter for a label, if present. Absence is not an error.
    pub async fn delete(pool: &PgPool, label: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM usage_counters WHERE mood_label = $1")
            .bind(label)
            .execute(pool)
            .await?;
        Ok(())
    }
}
