//! Usage statistics models.

use serde::Serialize;
use sqlx::FromRow;
use studymood_core::types::{DbId, Timestamp};

/// A row from the `usage_counters` table.
///
/// `mood_label` is a soft reference to `mood_entries.label`: denormalized,
/// rewritten on rename, and never enforced by the schema. `last_accessed_at`
/// is NULL until the first recorded access.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UsageCounter {
    pub id: DbId,
    pub mood_label: String,
    pub access_count: i64,
    pub last_accessed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
