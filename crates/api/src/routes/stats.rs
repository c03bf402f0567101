//! Route definitions for usage statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Usage statistics routes mounted at `/stats`.
///
/// ```text
/// GET /  -> list_stats (most-used first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats::list_stats))
}
