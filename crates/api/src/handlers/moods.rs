//! Handlers for the mood catalog.
//!
//! Thin adapters only: every rule (validation, duplicate labels, statistics
//! synchronization) lives in [`CatalogService`]; handlers translate between
//! HTTP and the service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use studymood_core::error::CoreError;
use studymood_core::types::DbId;
use studymood_db::catalog::CatalogService;
use studymood_db::error::ServiceError;
use studymood_db::models::mood::{CreateMood, UpdateMood};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /moods/filter`.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub label: Option<String>,
}

/// GET /api/v1/moods
///
/// List all mood entries. No ordering guarantee.
pub async fn list_moods(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let moods = CatalogService::list(&state.pool).await?;

    Ok(Json(DataResponse { data: moods }))
}

/// GET /api/v1/moods/filter?label=
///
/// Filter entries by exact label. A missing or blank `label` parameter is a
/// validation error; a label that matches nothing yields an empty list.
pub async fn filter_moods(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<impl IntoResponse> {
    let label = params.label.ok_or_else(|| {
        ServiceError::Core(CoreError::Validation(
            "label query parameter is required".to_string(),
        ))
    })?;

    let moods = CatalogService::filter_by_label(&state.pool, &label).await?;

    Ok(Json(DataResponse { data: moods }))
}

/// GET /api/v1/moods/{id}
///
/// Fetch a single entry by ID. Each successful lookup counts as one access
/// against the mood's usage counter.
pub async fn get_mood(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mood = CatalogService::get(&state.pool, id).await?;

    Ok(Json(DataResponse { data: mood }))
}

/// POST /api/v1/moods
///
/// Create a mood entry. Fails with 409 on a duplicate label and 400 on
/// missing content.
pub async fn create_mood(
    State(state): State<AppState>,
    Json(input): Json<CreateMood>,
) -> AppResult<impl IntoResponse> {
    let mood = CatalogService::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: mood })))
}

/// PUT /api/v1/moods/{id}
///
/// Partially update a mood entry. A label change is propagated to the
/// usage counter.
pub async fn update_mood(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMood>,
) -> AppResult<impl IntoResponse> {
    let mood = CatalogService::update(&state.pool, id, &input).await?;

    Ok(Json(DataResponse { data: mood }))
}

/// DELETE /api/v1/moods/{id}
///
/// Delete a mood entry and its usage counter.
pub async fn delete_mood(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CatalogService::delete(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
