//! Repository for the `mood_entries` collection.
//!
//! Plain row access only: duplicate-label policy, content validation, and
//! statistics synchronization all live in the catalog service.

use sqlx::PgPool;
use studymood_core::types::DbId;

use crate::models::mood::{CreateMood, MoodEntry, UpdateMood};

/// Column list for `mood_entries` queries.
const MOOD_COLUMNS: &str = "\
    id, label, phrases, study_tips, songs, colors, \
    snacks, emojis, quick_goals, rest_ideas, \
    created_at, updated_at";

/// Provides CRUD operations for mood entries.
pub struct MoodRepo;

impl MoodRepo {
    /// List all mood entries. No ordering guarantee.
    pub async fn list(pool: &PgPool) -> Result<Vec<MoodEntry>, sqlx::Error> {
        let query = format!("SELECT {MOOD_COLUMNS} FROM mood_entries");
        sqlx::query_as::<_, MoodEntry>(&query).fetch_all(pool).await
    }

    /// Find a mood entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MoodEntry>, sqlx::Error> {
        let query = format!("SELECT {MOOD_COLUMNS} FROM mood_entries WHERE id = $1");
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find all entries with an exact (case-sensitive) label match.
    pub async fn find_by_label(pool: &PgPool, label: &str) -> Result<Vec<MoodEntry>, sqlx::Error> {
        let query = format!("SELECT {MOOD_COLUMNS} FROM mood_entries WHERE label = $1");
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(label)
            .fetch_all(pool)
            .await
    }

    /// Check whether any entry carries the given label.
    pub async fn label_exists(pool: &PgPool, label: &str) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM mood_entries WHERE label = $1")
            .bind(label)
            .fetch_one(pool)
            .await?;
        Ok(count.0 > 0)
    }

    /// Check whether an entry *other than* `id` carries the given label.
    pub async fn label_used_by_other(
        pool: &PgPool,
        label: &str,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM mood_entries WHERE label = $1 AND id <> $2")
                .bind(label)
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(count.0 > 0)
    }

    /// Insert a new mood entry. Expects already-normalized input.
    pub async fn create(pool: &PgPool, input: &CreateMood) -> Result<MoodEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO mood_entries (\
                label, phrases, study_tips, songs, colors, \
                snacks, emojis, quick_goals, rest_ideas\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {MOOD_COLUMNS}"
        );
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(&input.label)
            .bind(&input.phrases)
            .bind(&input.study_tips)
            .bind(&input.songs)
            .bind(&input.colors)
            .bind(&input.snacks)
            .bind(&input.emojis)
            .bind(&input.quick_goals)
            .bind(&input.rest_ideas)
            .fetch_one(pool)
            .await
    }

    /// Partially update a mood entry. Expects already-normalized input.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMood,
    ) -> Result<Option<MoodEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE mood_entries SET \
                label = COALESCE($2, label), \
                phrases = COALESCE($3, phrases), \
                study_tips = COALESCE($4, study_tips), \
                songs = COALESCE($5, songs), \
                colors = COALESCE($6, colors), \
                snacks = COALESCE($7, snacks), \
                emojis = COALESCE($8, emojis), \
                quick_goals = COALESCE($9, quick_goals), \
                rest_ideas = COALESCE($10, rest_ideas), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {MOOD_COLUMNS}"
        );
        sqlx::query_as::<_, MoodEntry>(&query)
            .bind(id)
            .bind(input.label.as_deref())
            .bind(input.phrases.as_deref())
            .bind(input.study_tips.as_deref())
            .bind(input.songs.as_deref())
            .bind(input.colors.as_deref())
            .bind(input.snacks.as_deref())
            .bind(input.emojis.as_deref())
            .bind(input.quick_goals.as_deref())
            .bind(input.rest_ideas.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a mood entry by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM mood_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
