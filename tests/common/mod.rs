//! In-process mock of the camera management API.
//!
//! Serves the endpoints the provider consumes on an ephemeral port, with
//! request counters, failure switches and response delays so tests can
//! assert exactly what reached the network.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MockApiState {
    inner: Arc<Mutex<MockApiInner>>,
}

#[derive(Default)]
struct MockApiInner {
    cameras: Vec<Value>,
    locations: Vec<Value>,
    fail_list: bool,
    fail_create: bool,
    fail_delete: bool,
    list_delay_ms: u64,
    create_delay_ms: u64,
    list_calls: usize,
    create_calls: usize,
    delete_calls: usize,
}

impl MockApiState {
    pub fn seed_camera(&self, camera: Value) {
        self.inner.lock().unwrap().cameras.push(camera);
    }

    pub fn seed_location(&self, location: Value) {
        self.inner.lock().unwrap().locations.push(location);
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail_list = fail;
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.inner.lock().unwrap().fail_create = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.inner.lock().unwrap().fail_delete = fail;
    }

    pub fn set_list_delay_ms(&self, delay: u64) {
        self.inner.lock().unwrap().list_delay_ms = delay;
    }

    pub fn set_create_delay_ms(&self, delay: u64) {
        self.inner.lock().unwrap().create_delay_ms = delay;
    }

    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    pub fn create_calls(&self) -> usize {
        self.inner.lock().unwrap().create_calls
    }

    pub fn delete_calls(&self) -> usize {
        self.inner.lock().unwrap().delete_calls
    }

    pub fn camera_count(&self) -> usize {
        self.inner.lock().unwrap().cameras.len()
    }
}

pub struct MockApi {
    pub state: MockApiState,
    pub base_url: String,
}

/// Spawn the mock API on an ephemeral port
pub async fn spawn_api() -> MockApi {
    let state = MockApiState::default();

    let app = Router::new()
        .route("/api/cameras", get(list_cameras))
        .route("/api/cameras", post(create_camera))
        .route("/api/cameras/:id", delete(delete_camera))
        .route("/api/locations", get(list_locations))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("mock api addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock api");
    });

    MockApi {
        state,
        base_url: format!("http://{}/api", addr),
    }
}

async fn list_cameras(State(state): State<MockApiState>) -> (StatusCode, Json<Value>) {
    let (fail, delay, cameras) = {
        let mut inner = state.inner.lock().unwrap();
        inner.list_calls += 1;
        (inner.fail_list, inner.list_delay_ms, inner.cameras.clone())
    };

    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "camera list unavailable"})),
        );
    }

    (StatusCode::OK, Json(Value::Array(cameras)))
}

async fn create_camera(
    State(state): State<MockApiState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let (fail, delay) = {
        let mut inner = state.inner.lock().unwrap();
        inner.create_calls += 1;
        (inner.fail_create, inner.create_delay_ms)
    };

    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    if fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "camera create unavailable"})),
        );
    }

    let mut record = serde_json::Map::new();
    record.insert(
        "camera_id".to_string(),
        json!(format!("cam-{}", Uuid::new_v4().simple())),
    );
    record.insert("created_at".to_string(), json!(Utc::now().to_rfc3339()));
    for key in ["camera_name", "ipaddress", "location_name"] {
        if let Some(v) = body.get(key) {
            if !v.is_null() {
                record.insert(key.to_string(), v.clone());
            }
        }
    }
    let record = Value::Object(record);

    state.inner.lock().unwrap().cameras.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn delete_camera(
    State(state): State<MockApiState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let mut inner = state.inner.lock().unwrap();
    inner.delete_calls += 1;

    if inner.fail_delete {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "camera delete unavailable"})),
        );
    }

    // Idempotent: deleting an unknown id still reports success
    inner
        .cameras
        .retain(|c| c.get("camera_id").and_then(Value::as_str) != Some(id.as_str()));
    (StatusCode::OK, Json(json!({"ok": true})))
}

async fn list_locations(State(state): State<MockApiState>) -> (StatusCode, Json<Value>) {
    let locations = state.inner.lock().unwrap().locations.clone();
    (StatusCode::OK, Json(Value::Array(locations)))
}
