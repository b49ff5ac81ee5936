use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use herald_core::brief::{FieldErrors, validate};
use herald_core::generator::Generator;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
    issues: Option<FieldErrors>,
}

impl AppError {
    pub fn invalid_brief(issues: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "invalid campaign brief".to_owned(),
            issues: Some(issues),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = match self.issues {
            Some(issues) => serde_json::json!({ "error": self.message, "issues": issues }),
            None => serde_json::json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(generator: Arc<Generator>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/blueprint", post(create_blueprint))
        .layer(CorsLayer::permissive())
        .with_state(generator)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(generator: Arc<Generator>, bind: &str, port: u16) -> Result<()> {
    let app = build_router(generator);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("herald serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("herald serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\
<html><head><title>herald</title></head><body>\
<h1>herald</h1>\
<p>Campaign blueprint generator.</p>\
<p>POST a campaign brief to <code>/api/blueprint</code>; \
check <a href=\"/api/health\">/api/health</a>.</p>\
</body></html>",
    )
}

async fn health(State(generator): State<Arc<Generator>>) -> axum::response::Response {
    Json(serde_json::json!({
        "status": "ok",
        "model": generator.model_name(),
    }))
    .into_response()
}

async fn create_blueprint(
    State(generator): State<Arc<Generator>>,
    Json(body): Json<serde_json::Value>,
) -> Result<axum::response::Response, AppError> {
    let brief = validate(&body).map_err(AppError::invalid_brief)?;
    let response = generator.generate(&brief).await;
    Ok(Json(response).into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
