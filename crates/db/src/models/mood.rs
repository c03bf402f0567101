//! Mood catalog models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studymood_core::types::{DbId, Timestamp};

/// A row from the `mood_entries` table.
///
/// All eight content lists are ordered and stored with every element
/// trimmed; the catalog service rejects empty lists before insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MoodEntry {
    pub id: DbId,
    pub label: String,
    pub phrases: Vec<String>,
    pub study_tips: Vec<String>,
    pub songs: Vec<String>,
    pub colors: Vec<String>,
    pub snacks: Vec<String>,
    pub emojis: Vec<String>,
    pub quick_goals: Vec<String>,
    pub rest_ideas: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a mood entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMood {
    pub label: String,
    pub phrases: Vec<String>,
    pub study_tips: Vec<String>,
    pub songs: Vec<String>,
    pub colors: Vec<String>,
    pub snacks: Vec<String>,
    pub emojis: Vec<String>,
    pub quick_goals: Vec<String>,
    pub rest_ideas: Vec<String>,
}

/// DTO for partially updating a mood entry. Absent fields are kept as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMood {
    pub label: Option<String>,
    pub phrases: Option<Vec<String>>,
    pub study_tips: Option<Vec<String>>,
    pub songs: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub snacks: Option<Vec<String>>,
    pub emojis: Option<Vec<String>>,
    pub quick_goals: Option<Vec<String>>,
    pub rest_ideas: Option<Vec<String>>,
}
