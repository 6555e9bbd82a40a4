//! HTTP-level integration tests for the symptom classifier endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, register};
use serde_json::{json, Value};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_predict_cold_and_flu(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "Pat", "pat@test.com").await;

    let body = json!({ "symptoms": "I have fever and sore throat", "age": 25 });
    let response = post_json_auth(app, "/api/predictions/predict", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["risk_score"], 30);
    assert_eq!(json["risk_level"], "low");
    assert_eq!(json["conditions"][0]["name"], "Common Cold/Flu");
    assert_eq!(json["conditions"][0]["probability"], 75);
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_predict_cardiac_senior_is_high_risk(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "Senior", "senior@test.com").await;

    let body = json!({ "symptoms": "chest pain and trouble breathing", "age": "70" });
    let response = post_json_auth(app, "/api/predictions/predict", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["risk_score"], 85);
    assert_eq!(json["risk_level"], "high");
    assert_eq!(json["conditions"][0]["name"], "Possible Cardiac Issue");
    assert_eq!(json["recommendations"][0], "Seek immediate medical attention");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_predict_persists_inputs_and_result(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (user_id, token) = register(app.clone(), "Store", "store@test.com").await;

    let body = json!({
        "symptoms": "stomach cramps",
        "gender": "male",
        "lifestyle": "sedentary",
        "medicalHistory": "asthma",
    });
    let response = post_json_auth(app, "/api/predictions/predict", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let (score, level, extra, result): (i32, String, Value, Value) = sqlx::query_as(
        "SELECT risk_score, risk_level, additional_data, prediction_result
         FROM predictions WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(score, 35);
    assert_eq!(level, "medium");
    assert_eq!(extra["medical_history"], "asthma");
    assert_eq!(extra["lifestyle"], "sedentary");
    assert!(extra["age"].is_null());
    assert_eq!(result["conditions"][0]["name"], "Gastroenteritis");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_predict_without_symptoms_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "Empty", "empty@test.com").await;

    let response =
        post_json_auth(app, "/api/predictions/predict", json!({ "symptoms": "" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_predict_with_non_numeric_age_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "Age", "age@test.com").await;

    let body = json!({ "symptoms": "fever", "age": "forty" });
    let response = post_json_auth(app, "/api/predictions/predict", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_predict_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response =
        post_json(app, "/api/predictions/predict", json!({ "symptoms": "fever" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_returns_last_ten_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token) = register(app.clone(), "Hist", "hist@test.com").await;

    for i in 0..12 {
        let body = json!({ "symptoms": format!("headache day {i}") });
        let response = post_json_auth(app.clone(), "/api/predictions/predict", body, &token).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(app, "/api/predictions/history", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let predictions = json["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 10);
    assert_eq!(predictions[0]["symptoms"], "headache day 11");
    assert_eq!(predictions[0]["risk_level"], "low");
    assert!(predictions[0]["created_at"].is_string());
}
