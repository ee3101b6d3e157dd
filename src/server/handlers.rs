//! Request handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use super::AppState;

/// The rendered page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.html.to_string())
}

/// Raw animation payload, or 404 if it failed to load.
pub async fn api_asset(State(state): State<AppState>) -> Response {
    match state.asset {
        Some(asset) => Json(asset.as_ref().clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "asset not loaded"})),
        )
            .into_response(),
    }
}

/// Serve the loaded stylesheet.
pub async fn serve_css(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], state.style.to_string())
}

pub async fn health() -> &'static str {
    "ok"
}
