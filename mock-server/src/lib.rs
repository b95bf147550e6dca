//! Mock of the FastBill API entry point.
//!
//! One route, `POST /api/1.0/api.php`, guarded by basic auth. The `SERVICE`
//! field of the body selects what the in-memory [`Store`] does; the reply is
//! the usual `{REQUEST, RESPONSE}` envelope with status 200, including for
//! business errors, as the real service does.

mod store;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub use store::Store;

pub const API_PATH: &str = "/api/1.0/api.php";
pub const DEFAULT_EMAIL: &str = "test@example.com";
pub const DEFAULT_API_KEY: &str = "test-key";

/// Account credentials and reply quirks of a mock instance.
#[derive(Debug, Clone)]
pub struct MockOptions {
    pub email: String,
    pub api_key: String,
    /// Pretty-print replies and leave a comma before the final brace, the
    /// malformation the real service is known to produce.
    pub trailing_comma: bool,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            trailing_comma: false,
        }
    }
}

#[derive(Clone)]
struct AppState {
    store: Arc<RwLock<Store>>,
    authorization: Arc<str>,
    trailing_comma: bool,
}

pub fn app() -> Router {
    app_with(MockOptions::default())
}

pub fn app_with(options: MockOptions) -> Router {
    let credentials = format!("{}:{}", options.email, options.api_key);
    let state = AppState {
        store: Arc::new(RwLock::new(Store::new())),
        authorization: format!("Basic {}", STANDARD.encode(credentials)).into(),
        trailing_comma: options.trailing_comma,
    };
    Router::new().route(API_PATH, post(api)).with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, MockOptions::default()).await
}

pub async fn run_with(listener: TcpListener, options: MockOptions) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(options)).await
}

async fn api(State(state): State<AppState>, headers: HeaderMap, body: String) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == &*state.authorization);
    if !authorized {
        tracing::debug!("rejecting request without valid credentials");
        return (StatusCode::UNAUTHORIZED, "unauthorized").into_response();
    }

    let request: Value = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            let message = format!("invalid JSON: {e}");
            let envelope = json!({"RESPONSE": {"STATUS": "error", "ERRORS": [message]}});
            return reply(envelope, state.trailing_comma);
        }
    };

    tracing::debug!(service = ?request.get("SERVICE"), "handling request");
    let response = state.store.write().await.handle(&request);
    reply(json!({"REQUEST": request, "RESPONSE": response}), state.trailing_comma)
}

fn reply(envelope: Value, trailing_comma: bool) -> Response {
    let body = if trailing_comma {
        with_trailing_comma(&envelope)
    } else {
        envelope.to_string()
    };
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Pretty JSON with `,\n}` in place of the final `\n}`.
fn with_trailing_comma(envelope: &Value) -> String {
    let pretty = serde_json::to_string_pretty(envelope).unwrap_or_else(|_| envelope.to_string());
    match pretty.strip_suffix("\n}") {
        Some(head) => format!("{head},\n}}"),
        None => pretty,
    }
}
