//! StudyMood API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes)
//! so integration tests and the binary entrypoint can both access them.
//! All catalog/statistics logic lives in `studymood-db`; this crate only
//! maps it onto HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
