//! Runs the HTTP client and the web front end against a fake class API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use axum_macros::debug_handler;
use serde_json::{json, Value};

use classboard::cache;
use classboard::render::html::PageRenderer;
use classboard::server::{create_router, ServerState};
use classboard::timetable::DEFAULT_HOURS;
use classboard::types::Weekday;
use classboard::{layout, ApiClient, DashboardState, DataSource, RoomFilter, SourceError};

#[derive(Default)]
struct FakeDb {
    classrooms: Vec<Value>,
    classes: Vec<Value>,
    next_id: i64,
    broken_stats: bool,
    garbled_classes: bool,
}

type Db = Arc<Mutex<FakeDb>>;

#[debug_handler]
async fn list_classrooms(State(db): State<Db>) -> Json<Value> {
    Json(Value::Array(db.lock().unwrap().classrooms.clone()))
}

#[debug_handler]
async fn add_classroom(State(db): State<Db>, Json(body): Json<HashMap<String, String>>) -> Response {
    let mut db = db.lock().unwrap();
    let name = body.get("name").cloned().unwrap_or_default();
    if db.classrooms.iter().any(|r| r["name"] == json!(name)) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Room already exists" }))).into_response();
    }
    let capacity: i64 = body.get("capacity").and_then(|c| c.parse().ok()).unwrap_or(0);
    let id = db.classrooms.len() as i64 + 1;
    db.classrooms.push(json!({
        "id": id,
        "name": name,
        "capacity": capacity,
        "equipment": body.get("equipment").cloned().unwrap_or_default(),
    }));
    Json(json!(body)).into_response()
}

#[debug_handler]
async fn list_classes(State(db): State<Db>) -> Response {
    let db = db.lock().unwrap();
    if db.garbled_classes {
        return (StatusCode::OK, "<html>oops</html>").into_response();
    }
    Json(Value::Array(db.classes.clone())).into_response()
}

#[debug_handler]
async fn add_class(State(db): State<Db>, Json(body): Json<HashMap<String, String>>) -> Response {
    let mut db = db.lock().unwrap();
    let conflict = db.classes.iter().any(|c| {
        ["room_name", "day", "start_time"]
            .iter()
            .all(|k| c[*k] == json!(body.get(*k)))
    });
    if conflict {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "detail": "Time slot conflict in this room" })),
        )
            .into_response();
    }

    db.next_id += 1;
    let mut row = json!(body);
    row["id"] = json!(db.next_id);
    db.classes.push(row);
    Json(json!(body)).into_response()
}

#[debug_handler]
async fn remove_class(State(db): State<Db>, Path(id): Path<i64>) -> Json<Value> {
    db.lock().unwrap().classes.retain(|c| c["id"] != json!(id));
    Json(json!({ "msg": "Deleted" }))
}

#[debug_handler]
async fn stats(State(db): State<Db>) -> Response {
    let db = db.lock().unwrap();
    if db.broken_stats {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    Json(json!({
        "totalClasses": db.classes.len(),
        "totalClassrooms": db.classrooms.len(),
    }))
    .into_response()
}

fn fake_api(db: Db) -> Router {
    Router::new()
        .route("/api/classrooms", get(list_classrooms).post(add_classroom))
        .route("/api/classes", get(list_classes).post(add_class))
        .route("/api/classes/:id", delete(remove_class))
        .route("/api/dashboard-stats", get(stats))
        .with_state(db)
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn client_for(db: &Db) -> ApiClient {
    let addr = spawn(fake_api(db.clone())).await;
    ApiClient::new(&format!("http://{}/api", addr)).unwrap()
}

fn fields(pairs: &[(&str, &str)]) -> classboard::types::FormFields {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn algebra() -> classboard::types::FormFields {
    fields(&[
        ("class_id", "M1"),
        ("name", "Algebra"),
        ("teacher", "Noether"),
        ("room_name", "B2"),
        ("day", "Tuesday"),
        ("start_time", "11:00"),
        ("end_time", "12:00"),
    ])
}

#[tokio::test]
async fn test_create_then_load_places_class() {
    let db = Db::default();
    let client = client_for(&db).await;

    let outcome = client
        .create_classroom(&fields(&[("name", "B2"), ("capacity", "30"), ("equipment", "Projector")]))
        .await
        .unwrap();
    assert!(outcome.is_success());
    assert!(client.create_class(&algebra()).await.unwrap().is_success());

    let snapshot = cache::load(&client).await.unwrap();
    assert_eq!(snapshot.classrooms[0].capacity, 30);
    assert_eq!(snapshot.stats.total_classes, 1);
    assert_eq!(snapshot.classes[0].end_time.as_deref(), Some("12:00"));

    let grid = layout(&snapshot.classes, DEFAULT_HOURS, &RoomFilter::All);
    assert_eq!(grid.placements(), vec![(11, Weekday::Tuesday, snapshot.classes[0].id)]);
}

#[tokio::test]
async fn test_rejected_writes_report_status() {
    let db = Db::default();
    let client = client_for(&db).await;

    client.create_class(&algebra()).await.unwrap();
    let outcome = client.create_class(&algebra()).await.unwrap();
    assert_eq!(outcome.status, 409);
    assert!(!outcome.is_success());

    let snapshot = cache::load(&client).await.unwrap();
    assert_eq!(snapshot.classes.len(), 1);
}

#[tokio::test]
async fn test_failed_stats_fails_the_load() {
    let db = Db::default();
    db.lock().unwrap().broken_stats = true;
    let client = client_for(&db).await;

    let err = cache::load(&client).await.unwrap_err();
    assert!(matches!(err, SourceError::UnexpectedResponse { .. }));
}

#[tokio::test]
async fn test_garbled_body_is_a_decode_error() {
    let db = Db::default();
    db.lock().unwrap().garbled_classes = true;
    let client = client_for(&db).await;

    let err = client.classes().await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    // Bind and drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}/api", addr)).unwrap();
    let err = client.stats().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_front_end_create_and_delete() {
    let db = Db::default();
    let client = client_for(&db).await;
    let state = Arc::new(ServerState {
        dashboard: DashboardState::new(Arc::new(client), DEFAULT_HOURS),
        pages: PageRenderer::new().unwrap(),
    });
    let front = spawn(create_router(state)).await;
    let http = reqwest::Client::new();
    let base = format!("http://{}", front);

    let page = http
        .post(format!("{}/classes", base))
        .form(&[
            ("class_id", "M1"),
            ("name", "Algebra"),
            ("teacher", "Noether"),
            ("room_name", "B2"),
            ("day", "Tuesday"),
            ("start_time", "11:00"),
            ("end_time", "12:00"),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("href=\"/classes/1/delete\""));

    let grid: Value = http
        .get(format!("{}/timetable.json?room=B2", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(grid["filter"], json!("B2"));
    assert_eq!(grid["rows"][4]["label"], json!("11:00"));
    assert_eq!(grid["rows"][4]["cells"][1]["class"]["id"], json!(1));

    let confirm = http
        .get(format!("{}/classes/1/delete", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(confirm.contains("Delete class?"));
    assert!(confirm.contains("Algebra"));

    http.post(format!("{}/classes/1/delete", base))
        .form(&[("confirm", "no")])
        .send()
        .await
        .unwrap();
    assert_eq!(db.lock().unwrap().classes.len(), 1);

    let page = http
        .post(format!("{}/classes/1/delete", base))
        .form(&[("confirm", "yes")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(db.lock().unwrap().classes.is_empty());
    assert!(!page.contains("href=\"/classes/1/delete\""));

    let health = http.get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
}
