//! Integration tests for predictions, alerts, and the aggregate stat reads.

use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;
use symptrack_core::alert::{AlertCategory, AlertSeverity};
use symptrack_db::models::alert::CreateCommunityAlert;
use symptrack_db::models::prediction::CreatePrediction;
use symptrack_db::models::user::CreateUser;
use symptrack_db::repositories::{AlertRepo, PredictionRepo, StatsRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        name: "Stats User".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone: None,
        age: None,
        gender: None,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

fn new_prediction(user_id: i64, symptoms: &str, score: i32, level: &str) -> CreatePrediction {
    CreatePrediction {
        user_id,
        symptoms: symptoms.to_string(),
        additional_data: json!({ "age": null }),
        prediction_result: json!({ "risk_score": score }),
        risk_score: score,
        risk_level: level.to_string(),
    }
}

fn new_alert(title: &str) -> CreateCommunityAlert {
    CreateCommunityAlert {
        category: AlertCategory::DiseaseOutbreak,
        title: title.to_string(),
        description: None,
        severity: AlertSeverity::High,
        location: Some("Springfield".to_string()),
        affected_count: Some(12),
        source: Some("County Health Dept".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_is_limited_and_newest_first(pool: PgPool) {
    let user_id = create_user(&pool, "history@test.com").await;
    for i in 0..12 {
        PredictionRepo::create(&pool, &new_prediction(user_id, &format!("entry {i}"), 20, "low"))
            .await
            .unwrap();
    }

    let history = PredictionRepo::list_recent_for_user(&pool, user_id, 10)
        .await
        .unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0].symptoms, "entry 11");
    assert_eq!(history[9].symptoms, "entry 2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_is_scoped_to_user(pool: PgPool) {
    let mine = create_user(&pool, "mine@test.com").await;
    let theirs = create_user(&pool, "theirs@test.com").await;
    PredictionRepo::create(&pool, &new_prediction(theirs, "not mine", 30, "low"))
        .await
        .unwrap();

    let history = PredictionRepo::list_recent_for_user(&pool, mine, 10)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_out_of_range_score_rejected(pool: PgPool) {
    let user_id = create_user(&pool, "range@test.com").await;
    let result = PredictionRepo::create(&pool, &new_prediction(user_id, "x", 101, "high")).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_for_user_without_data(pool: PgPool) {
    let user_id = create_user(&pool, "empty@test.com").await;

    assert_eq!(StatsRepo::average_risk_score(&pool, user_id).await.unwrap(), None);
    assert_eq!(StatsRepo::prediction_count(&pool, user_id).await.unwrap(), 0);
    assert_eq!(StatsRepo::vlog_count(&pool, user_id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_average_risk_score(pool: PgPool) {
    let user_id = create_user(&pool, "avg@test.com").await;
    for score in [30, 45, 75] {
        PredictionRepo::create(&pool, &new_prediction(user_id, "s", score, "medium"))
            .await
            .unwrap();
    }

    let avg = StatsRepo::average_risk_score(&pool, user_id)
        .await
        .unwrap()
        .unwrap();
    assert!((avg - 50.0).abs() < f64::EPSILON);
    assert_eq!(StatsRepo::prediction_count(&pool, user_id).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_daily_risk_trend_groups_by_day_within_window(pool: PgPool) {
    let user_id = create_user(&pool, "trend@test.com").await;
    for score in [20, 40] {
        PredictionRepo::create(&pool, &new_prediction(user_id, "today", score, "low"))
            .await
            .unwrap();
    }
    let old = PredictionRepo::create(&pool, &new_prediction(user_id, "old", 90, "high"))
        .await
        .unwrap();
    sqlx::query("UPDATE predictions SET created_at = NOW() - INTERVAL '10 days' WHERE id = $1")
        .bind(old.id)
        .execute(&pool)
        .await
        .unwrap();

    let trend = StatsRepo::daily_risk_trend(&pool, user_id, Utc::now() - Duration::days(7))
        .await
        .unwrap();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].predictions, 2);
    assert!((trend[0].average_risk_score - 30.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alerts_limited_and_newest_first(pool: PgPool) {
    for i in 0..22 {
        AlertRepo::create(&pool, &new_alert(&format!("alert {i}")))
            .await
            .unwrap();
    }

    let alerts = AlertRepo::list_recent(&pool, 20).await.unwrap();
    assert_eq!(alerts.len(), 20);
    assert_eq!(alerts[0].title, "alert 21");
    assert_eq!(alerts[0].category, "Disease Outbreak");
    assert_eq!(alerts[0].severity, "High");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_since_excludes_old_alerts(pool: PgPool) {
    AlertRepo::create(&pool, &new_alert("fresh")).await.unwrap();
    let stale = AlertRepo::create(&pool, &new_alert("stale")).await.unwrap();
    sqlx::query("UPDATE community_alerts SET created_at = NOW() - INTERVAL '10 days' WHERE id = $1")
        .bind(stale.id)
        .execute(&pool)
        .await
        .unwrap();

    let since = Utc::now() - Duration::days(7);
    assert_eq!(AlertRepo::count_since(&pool, since).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alert_category_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO community_alerts (category, title, severity) VALUES ('Gossip', 't', 'Low')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
