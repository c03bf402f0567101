//! Catalog service: mood CRUD plus the synchronization rules that keep the
//! usage-statistics projection coherent.
//!
//! The catalog is the source of truth; counters are a derived projection
//! keyed by mood label. Every mutating catalog operation (create, rename,
//! delete) and every successful fetch-by-id triggers exactly one statistics
//! operation. Statistics failures after a successful catalog mutation are
//! logged and swallowed: the authoritative write already happened and must
//! not be reported as failed because a best-effort projection update failed.
//!
//! Ordering invariants:
//! - On rename, the old label is captured from the pre-update row *before*
//!   the catalog update lands; renaming afterwards would orphan the counter.
//! - On delete, the label is resolved before the row disappears.
//! - Access is recorded only after a lookup succeeds, never on NotFound.

use sqlx::PgPool;
use studymood_core::content::{normalize_label, normalize_list};
use studymood_core::error::CoreError;
use studymood_core::types::DbId;

use crate::error::{ServiceError, ServiceResult};
use crate::models::mood::{CreateMood, MoodEntry, UpdateMood};
use crate::repositories::{MoodRepo, UsageStatsRepo};

/// Entity name used in NotFound errors.
const ENTITY: &str = "MoodEntry";

/// Orchestrates mood catalog operations and statistics synchronization.
pub struct CatalogService;

impl CatalogService {
    /// List all mood entries.
    pub async fn list(pool: &PgPool) -> ServiceResult<Vec<MoodEntry>> {
        Ok(MoodRepo::list(pool).await?)
    }

    /// Fetch a mood entry by ID and record the access.
    ///
    /// The counter increment is the qualifying-read hook: it runs exactly
    /// once per successful lookup and is skipped entirely on NotFound.
    pub async fn get(pool: &PgPool, id: DbId) -> ServiceResult<MoodEntry> {
        let entry = MoodRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if let Err(err) = UsageStatsRepo::record_access(pool, &entry.label).await {
            tracing::warn!(
                mood_id = entry.id,
                label = %entry.label,
                error = %err,
                "Failed to record access; counter is now stale",
            );
        }

        Ok(entry)
    }

    /// Find all entries matching a label exactly.
    ///
    /// A blank label is a validation error; a label that matches nothing
    /// yields an empty vec.
    pub async fn filter_by_label(pool: &PgPool, label: &str) -> ServiceResult<Vec<MoodEntry>> {
        let label = normalize_label(label)?;
        Ok(MoodRepo::find_by_label(pool, &label).await?)
    }

    /// Create a mood entry, then eagerly seed its zero-count counter.
    ///
    /// Duplicate labels are rejected by a pre-insert check. The check and
    /// the insert are not atomic; two creates racing on the same label
    /// inside that window can both land (known limitation, no unique index
    /// on the catalog by design).
    pub async fn create(pool: &PgPool, input: &CreateMood) -> ServiceResult<MoodEntry> {
        let normalized = normalize_create(input)?;

        if MoodRepo::label_exists(pool, &normalized.label).await? {
            return Err(ServiceError::Core(CoreError::Conflict(format!(
                "a mood with label '{}' already exists",
                normalized.label
            ))));
        }

        let entry = MoodRepo::create(pool, &normalized).await?;

        // Projection seed is best-effort: the entry is already persisted.
        if let Err(err) = UsageStatsRepo::ensure_counter(pool, &entry.label).await {
            tracing::warn!(
                mood_id = entry.id,
                label = %entry.label,
                error = %err,
                "Failed to seed usage counter for new mood",
            );
        }

        tracing::info!(mood_id = entry.id, label = %entry.label, "Mood created");
        Ok(entry)
    }

    /// Partially update a mood entry, propagating label changes to its
    /// counter.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMood) -> ServiceResult<MoodEntry> {
        let normalized = normalize_update(input)?;

        let existing = MoodRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        let old_label = existing.label;

        if let Some(ref new_label) = normalized.label {
            if *new_label != old_label && MoodRepo::label_used_by_other(pool, new_label, id).await?
            {
                return Err(ServiceError::Core(CoreError::Conflict(format!(
                    "a different mood already uses label '{new_label}'"
                ))));
            }
        }

        let updated = MoodRepo::update(pool, id, &normalized)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        if updated.label != old_label {
            if let Err(err) = UsageStatsRepo::rename(pool, &old_label, &updated.label).await {
                tracing::warn!(
                    mood_id = id,
                    old_label = %old_label,
                    new_label = %updated.label,
                    error = %err,
                    "Failed to rename usage counter; counter is orphaned",
                );
            } else {
                tracing::info!(
                    mood_id = id,
                    old_label = %old_label,
                    new_label = %updated.label,
                    "Mood renamed",
                );
            }
        }

        Ok(updated)
    }

    /// Delete a mood entry and drop its counter.
    pub async fn delete(pool: &PgPool, id: DbId) -> ServiceResult<()> {
        let entry = MoodRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        let deleted = MoodRepo::delete(pool, id).await?;
        if !deleted {
            // Lost a race with a concurrent delete.
            return Err(ServiceError::Core(CoreError::NotFound { entity: ENTITY, id }));
        }

        if let Err(err) = UsageStatsRepo::delete(pool, &entry.label).await {
            tracing::warn!(
                mood_id = id,
                label = %entry.label,
                error = %err,
                "Failed to delete usage counter; counter is orphaned",
            );
        }

        tracing::info!(mood_id = id, label = %entry.label, "Mood deleted");
        Ok(())
    }
}

/// Normalize a create payload: trimmed label, trimmed non-empty lists.
fn normalize_create(input: &CreateMood) -> Result<CreateMood, CoreError> {
    Ok(CreateMood {
        label: normalize_label(&input.label)?,
        phrases: normalize_list("phrases", &input.phrases)?,
        study_tips: normalize_list("study_tips", &input.study_tips)?,
        songs: normalize_list("songs", &input.songs)?,
        colors: normalize_list("colors", &input.colors)?,
        snacks: normalize_list("snacks", &input.snacks)?,
        emojis: normalize_list("emojis", &input.emojis)?,
        quick_goals: normalize_list("quick_goals", &input.quick_goals)?,
        rest_ideas: normalize_list("rest_ideas", &input.rest_ideas)?,
    })
}

/// Normalize an update payload; only provided fields are validated.
fn normalize_update(input: &UpdateMood) -> Result<UpdateMood, CoreError> {
    let normalize_opt = |field: &'static str,
                         items: &Option<Vec<String>>|
     -> Result<Option<Vec<String>>, CoreError> {
        items
            .as_deref()
            .map(|items| normalize_list(field, items))
            .transpose()
    };

    Ok(UpdateMood {
        label: input
            .label
            .as_deref()
            .map(normalize_label)
            .transpose()?,
        phrases: normalize_opt("phrases", &input.phrases)?,
        study_tips: normalize_opt("study_tips", &input.study_tips)?,
        songs: normalize_opt("songs", &input.songs)?,
        colors: normalize_opt("colors", &input.colors)?,
        snacks: normalize_opt("snacks", &input.snacks)?,
        emojis: normalize_opt("emojis", &input.emojis)?,
        quick_goals: normalize_opt("quick_goals", &input.quick_goals)?,
        rest_ideas: normalize_opt("rest_ideas", &input.rest_ideas)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateMood {
        CreateMood {
            label: " cansada ".to_string(),
            phrases: vec!["  respire ".to_string()],
            study_tips: vec!["pausas curtas".to_string()],
            songs: vec!["lo-fi".to_string()],
            colors: vec!["azul".to_string()],
            snacks: vec!["chá".to_string()],
            emojis: vec!["😴".to_string()],
            quick_goals: vec!["ler uma página".to_string()],
            rest_ideas: vec!["alongar".to_string()],
        }
    }

    #[test]
    fn create_payload_is_trimmed() {
        let normalized = normalize_create(&valid_create()).unwrap();
        assert_eq!(normalized.label, "cansada");
        assert_eq!(normalized.phrases, vec!["respire"]);
    }

    #[test]
    fn create_payload_rejects_empty_list() {
        let mut input = valid_create();
        input.phrases.clear();
        assert!(matches!(
            normalize_create(&input),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn update_payload_ignores_absent_fields() {
        let normalized = normalize_update(&UpdateMood::default()).unwrap();
        assert!(normalized.label.is_none());
        assert!(normalized.phrases.is_none());
    }

    #[test]
    fn update_payload_validates_provided_fields() {
        let input = UpdateMood {
            songs: Some(vec![]),
            ..UpdateMood::default()
        };
        assert!(matches!(
            normalize_update(&input),
            Err(CoreError::Validation(_))
        ));
    }
}
