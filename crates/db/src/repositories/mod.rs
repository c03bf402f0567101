//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Cross-collection
//! orchestration belongs to `crate::catalog`, not here.

pub mod mood_repo;
pub mod usage_stats_repo;

pub use mood_repo::MoodRepo;
pub use usage_stats_repo::UsageStatsRepo;
