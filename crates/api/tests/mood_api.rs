//! Integration tests for the mood catalog and statistics endpoints.
//!
//! Exercises the HTTP surface end to end: status codes, error envelopes,
//! and the visible effects of statistics synchronization.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, send_json};
use serde_json::json;
use sqlx::PgPool;

fn mood_payload(label: &str) -> serde_json::Value {
    json!({
        "label": label,
        "phrases": ["você consegue"],
        "study_tips": ["pomodoro de 25 minutos"],
        "songs": ["lo-fi beats"],
        "colors": ["azul claro"],
        "snacks": ["chá de camomila"],
        "emojis": ["😴"],
        "quick_goals": ["ler duas páginas"],
        "rest_ideas": ["alongar por cinco minutos"]
    })
}

async fn create_mood(app: axum::Router, label: &str) -> serde_json::Value {
    let response = send_json(app, Method::POST, "/api/v1/moods", &mood_payload(label)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_entry(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = create_mood(app, "cansada").await;
    assert_eq!(json["data"]["label"], "cansada");
    assert!(json["data"]["id"].is_i64());
    assert_eq!(json["data"]["phrases"][0], "você consegue");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_create_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_mood(app, "ansiosa").await;

    let app = common::build_test_app(pool);
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/moods",
        &mood_payload("ansiosa"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_empty_list_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut payload = mood_payload("confusa");
    payload["phrases"] = json!([]);

    let response = send_json(app, Method::POST, "/api/v1/moods", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Read paths
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/moods/4242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filter_without_label_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/moods/filter").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filter_with_no_match_returns_empty_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_mood(app, "motivada").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/moods/filter?label=procrastinadora").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_all_entries(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    create_mood(app, "curiosa").await;
    let app = common::build_test_app(pool.clone());
    create_mood(app, "feliz").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/moods").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Statistics visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_by_id_shows_up_in_stats(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = create_mood(app, "inspirada").await;
    let id = created["data"]["id"].as_i64().unwrap();

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/moods/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let stats = json["data"].as_array().unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["mood_label"], "inspirada");
    assert_eq!(stats[0]["access_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_sorted_by_usage(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = create_mood(app, "cansada").await;
    let app = common::build_test_app(pool.clone());
    let second = create_mood(app, "estressada").await;

    let second_id = second["data"]["id"].as_i64().unwrap();
    for _ in 0..3 {
        let app = common::build_test_app(pool.clone());
        get(app, &format!("/api/v1/moods/{second_id}")).await;
    }
    let first_id = first["data"]["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    get(app, &format!("/api/v1/moods/{first_id}")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/stats").await).await;
    let stats = json["data"].as_array().unwrap();
    assert_eq!(stats[0]["mood_label"], "estressada");
    assert_eq!(stats[1]["mood_label"], "cansada");
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_moves_counter(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = create_mood(app, "cansada").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/moods/{id}"),
        &json!({ "label": "exausta" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["label"], "exausta");

    let app = common::build_test_app(pool);
    let stats = body_json(get(app, "/api/v1/stats").await).await;
    let labels: Vec<_> = stats["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["mood_label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["exausta"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_204_and_clears_stats(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = create_mood(app, "desanimada").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/moods/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/moods/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let stats = body_json(get(app, "/api/v1/stats").await).await;
    assert_eq!(stats["data"], json!([]));
}
