//! Handlers for usage statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use studymood_db::error::ServiceError;
use studymood_db::repositories::UsageStatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats
///
/// List all usage counters, most-used first.
pub async fn list_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counters = UsageStatsRepo::list(&state.pool)
        .await
        .map_err(ServiceError::from)?;

    Ok(Json(DataResponse { data: counters }))
}
