pub mod moods;
pub mod stats;
