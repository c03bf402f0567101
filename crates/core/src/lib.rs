//! Domain logic for the StudyMood catalog.
//!
//! Pure code only: shared type aliases, the domain error enum, and the
//! normalization rules for mood labels and content lists. Everything that
//! touches the store lives in `studymood-db`.

pub mod content;
pub mod error;
pub mod types;
