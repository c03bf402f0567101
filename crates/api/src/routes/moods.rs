//! Route definitions for the mood catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::moods;
use crate::state::AppState;

/// Mood catalog routes mounted at `/moods`.
///
/// ```text
/// GET    /         -> list_moods
/// POST   /         -> create_mood
/// GET    /filter   -> filter_moods (?label=)
/// GET    /{id}     -> get_mood (records an access)
/// PUT    /{id}     -> update_mood
/// DELETE /{id}     -> delete_mood
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(moods::list_moods).post(moods::create_mood))
        .route("/filter", get(moods::filter_moods))
        .route(
            "/{id}",
            get(moods::get_mood)
                .put(moods::update_mood)
                .delete(moods::delete_mood),
        )
}
