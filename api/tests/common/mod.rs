use std::sync::Arc;

use api::routes::{router, AppState};
use api::seed::seed_roster;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestEnv {
    pub db: Arc<DatabaseConnection>,
    pub router: Router,
}

/// In-memory sqlite with the employee table and the seeded starter
/// roster, fronted by the real router.
pub async fn setup_seeded() -> TestEnv {
    let env = setup_empty().await;
    seed_roster(env.db.as_ref()).await.unwrap();
    env
}

pub async fn setup_empty() -> TestEnv {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    let db = Arc::new(conn);
    bootstrap_sqlite(db.as_ref()).await;
    let router = router(AppState::new(db.clone()));
    TestEnv { db, router }
}

async fn bootstrap_sqlite(db: &DatabaseConnection) {
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE employee (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            department TEXT NOT NULL,
            tenure INTEGER NOT NULL,
            level INTEGER NOT NULL,
            skills TEXT NOT NULL,
            risk TEXT,
            digital_literacy INTEGER NOT NULL DEFAULT 1,
            career_goals TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ))
    .await
    .unwrap();
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn patch_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Id of the seeded employee with the given name.
pub async fn id_of(router: &Router, name: &str) -> String {
    let (status, body) = get_json(router, "/employees").await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == name)
        .unwrap_or_else(|| panic!("no seeded employee named {name}"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}
