pub mod health;
pub mod moods;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /moods              list, create
/// /moods/filter       filter by ?label=
/// /moods/{id}         get (records access), update, delete
///
/// /stats              usage counters, most-used first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/moods", moods::router())
        .nest("/stats", stats::router())
}
