use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{error, info};

use crate::error::TranslateError;
use crate::state::AppState;

/// The CORS headers are fixed and attached to every response the router
/// produces, error and preflight responses included, so they are set as
/// response-header layers rather than per-handler.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/translate",
            post(translate)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/api/health", get(health_check))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

#[derive(Debug, Serialize)]
struct TranslationResult {
    translation: String,
    original: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
}

async fn translate(State(state): State<AppState>, body: Bytes) -> Response {
    // An absent body is an empty object; a body that fails to parse falls
    // through to the generic failure path instead of a 400.
    let payload: Value = if body.is_empty() {
        json!({})
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(err) => {
                return error_response(&state, TranslateError::Internal(err.to_string()))
            }
        }
    };

    let text = match payload.get("text").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "text is required" })),
            )
                .into_response()
        }
    };

    let api_key = match state.config.api_key.as_deref() {
        Some(key) => key,
        None => return error_response(&state, TranslateError::ApiKeyMissing),
    };

    match state.deepseek.translate_to_chinese(api_key, &text).await {
        Ok(translation) => {
            info!("Translated {} chars", text.chars().count());
            (
                StatusCode::OK,
                Json(TranslationResult {
                    translation,
                    original: text,
                }),
            )
                .into_response()
        }
        Err(err) => error_response(&state, err),
    }
}

fn error_response(state: &AppState, err: TranslateError) -> Response {
    error!("Translation error: {}", err);

    let (status, message) = err.classify();
    let details = state.config.dev_mode.then(|| err.to_string());

    (
        status,
        Json(ErrorBody {
            error: message,
            details,
        }),
    )
        .into_response()
}
