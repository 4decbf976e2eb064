//! In-process fake of the AGDB player directory API.
//!
//! Implements the four routes the bot consumes with the same status codes and JSON
//! shapes as the real service. Every request passes through an interceptor that
//! records it and applies the configured delay, forced failure status, or
//! malformed body before the route handler runs.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Path, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

/// A request as seen by the fake API.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Raw request path, still percent-encoded.
    pub path: String,
    /// Value of the `master-Key` header, if sent.
    pub master_key: Option<String>,
    /// JSON body, if the request carried one.
    pub body: Option<Value>,
}

/// Mutable state behind the fake API.
#[derive(Debug, Default)]
pub struct FakeState {
    pub players: HashMap<String, Value>,
    pub servers: Vec<Value>,
    pub master_key: String,
    /// Status every route answers with instead of its normal response.
    pub failure: Option<u16>,
    /// Answer every route with 200 and a body that is not JSON.
    pub malformed: bool,
    pub delay: Option<Duration>,
    pub requests: Vec<RecordedRequest>,
}

/// Shared handle to the fake API state.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new(state: FakeState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Locks the state. A poisoned lock only means another test thread panicked,
    /// so the inner value is still used.
    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Builds the axum router serving the AGDB routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/players/{id}", get(get_player))
            .route("/players/ban/{id}", post(ban_player))
            .route("/players/unban/{id}", post(unban_player))
            .route("/servers", get(list_servers))
            .layer(from_fn_with_state(self.clone(), intercept))
            .with_state(self.clone())
    }
}

async fn intercept(State(api): State<FakeApi>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();

    let (delay, failure, malformed) = {
        let mut state = api.state();
        state.requests.push(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            master_key: parts
                .headers
                .get("master-Key")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&bytes).ok(),
        });
        (state.delay, state.failure, state.malformed)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(status) = failure {
        return StatusCode::from_u16(status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response();
    }

    if malformed {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn authorized(api: &FakeApi, headers: &HeaderMap) -> bool {
    let state = api.state();
    headers
        .get("master-Key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| key == state.master_key)
}

async fn get_player(State(api): State<FakeApi>, Path(id): Path<String>) -> Response {
    match api.state().players.get(&id) {
        Some(player) => Json(player.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Player not found" })))
            .into_response(),
    }
}

async fn ban_player(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !authorized(&api, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let reason = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v.get("reason").cloned())
        .unwrap_or(Value::Null);

    let mut state = api.state();
    let Some(player) = state.players.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    player["isBanned"] = Value::Bool(true);
    player["banReason"] = reason;

    Json(json!({ "steamID": id, "message": "Player has been banned" })).into_response()
}

async fn unban_player(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&api, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut state = api.state();
    let Some(player) = state.players.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    player["isBanned"] = Value::Bool(false);
    player["banReason"] = Value::Null;

    Json(json!({ "steamID": id, "message": "Player has been unbanned" })).into_response()
}

async fn list_servers(State(api): State<FakeApi>) -> Response {
    Json(Value::Array(api.state().servers.clone())).into_response()
}
