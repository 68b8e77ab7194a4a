//! In-process stand-in for the REST API used by the client integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use carelink_client::{ApiClient, Session};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock API saw for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

pub type Seen = Arc<Mutex<Vec<SeenRequest>>>;

pub struct MockApi {
    pub base_url: String,
    pub seen: Seen,
}

impl MockApi {
    pub fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(&self.base_url, session)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> SeenRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

/// Bind the mock API to an ephemeral port and serve it in the background.
pub async fn spawn_mock_api() -> MockApi {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/api/parents", get(list_parents))
        .route("/api/parents/{id}", put(update_parent).delete(delete_parent))
        .route(
            "/api/infants/{id}",
            get(get_infant).put(update_infant).delete(delete_infant),
        )
        .route("/api/auth/signin", post(sign_in))
        .route("/actuator/health", get(health))
        .route("/actuator/metrics/{name}", get(metric))
        .route("/api/logging/recent", get(recent_logs))
        .route("/api/slow", get(slow))
        .route("/api/broken", get(broken))
        .layer(from_fn_with_state(seen.clone(), record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}/"),
        seen,
    }
}

async fn record(State(seen): State<Seen>, req: Request, next: Next) -> Response {
    seen.lock().unwrap().push(SeenRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        authorization: req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    next.run(req).await
}

async fn list_parents() -> Json<Value> {
    Json(json!([
        {"id": 1, "firstName": "Grace", "lastName": "Mensah", "phoneNumber": "0244123456"},
        {"id": 2, "firstName": "Ama", "lastName": "Owusu"}
    ]))
}

async fn delete_parent(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn update_parent(Path(id): Path<i64>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(id);
    Json(body)
}

async fn update_infant(Path(id): Path<i64>, Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(id);
    Json(body)
}

async fn delete_infant(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn get_infant(Path(id): Path<i64>) -> Response {
    if id == 7 {
        Json(json!({
            "id": 7, "firstName": "Kofi", "lastName": "Mensah",
            "dateOfBirth": "2025-01-15", "gender": "MALE", "parentId": 1
        }))
        .into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": 404, "error": "Not Found",
                "message": format!("Infant {id} not found"),
                "path": format!("/api/infants/{id}")
            })),
        )
            .into_response()
    }
}

async fn sign_in(Json(body): Json<Value>) -> Response {
    if body["password"] == "correct-horse" {
        Json(json!({"token": mint_token("HEALTH_WORKER", 3600), "username": "abena"})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": 401, "message": "Bad credentials"})),
        )
            .into_response()
    }
}

async fn health() -> Json<Value> {
    Json(json!({"status": "UP", "components": {"db": {"status": "UP"}}}))
}

async fn metric(Path(name): Path<String>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let value = match params.get("tag").map(String::as_str) {
        Some("area:heap") => 268_435_456.0,
        Some("area:nonheap") => 67_108_864.0,
        _ => 335_544_320.0,
    };
    Json(json!({
        "name": name,
        "baseUnit": "bytes",
        "measurements": [{"statistic": "VALUE", "value": value}],
        "availableTags": [{"tag": "area", "values": ["heap", "nonheap"]}]
    }))
}

async fn recent_logs() -> Json<Value> {
    Json(json!([
        {"timestamp": "2025-06-01T08:00:00Z", "level": "INFO", "logger": "c.c.Api", "message": "started"}
    ]))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(30)).await;
    Json(json!([]))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::OK, "{not json")
}

/// HS256 credential with the given role, expiring `ttl_secs` from now.
pub fn mint_token(role: &str, ttl_secs: i64) -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let claims = json!({
        "sub": "17",
        "role": role,
        "username": "abena",
        "email": "abena@clinic.org",
        "iat": now,
        "exp": now + ttl_secs,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"mock-api-secret"),
    )
    .unwrap()
}
