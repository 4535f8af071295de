// crates/api/src/lib.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use sysmod_core::{LlmResponseEnvelope, SysmodError, SysmodResult};
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;

use handlers::ApiHandlers;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_enabled: true,
        }
    }
}

/// API server
pub struct ApiServer {
    config: ApiConfig,
    handlers: Arc<ApiHandlers>,
}

impl ApiServer {
    pub fn new(config: ApiConfig, handlers: Arc<ApiHandlers>) -> Self {
        Self { config, handlers }
    }

    pub async fn serve(self) -> SysmodResult<()> {
        let addr: std::net::SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| SysmodError::Network(format!("Invalid address: {}", e)))?;
        let app = self.router();

        info!("API server listening on {}", addr);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .map_err(|e| SysmodError::Network(e.to_string()))?;

        Ok(())
    }

    pub fn router(&self) -> Router {
        let mut app = Router::new()
            .route("/health", get(health_check))
            .route("/ready", get(readiness_check))
            .route("/metrics", get(metrics_handler))
            .route(
                "/generate-transfer-function-only",
                post(transfer_function_handler),
            )
            .route("/generate-full-analysis", post(full_analysis_handler))
            .route("/validate-user-answer", post(validation_handler))
            .with_state(self.handlers.clone());

        if self.config.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }

        app
    }
}

// Health check endpoint
async fn health_check(State(handlers): State<Arc<ApiHandlers>>) -> impl IntoResponse {
    Json(handlers.health())
}

// Readiness check endpoint
async fn readiness_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "ready": true,
        "timestamp": chrono::Utc::now()
    }))
}

// Prometheus metrics endpoint
async fn metrics_handler(State(handlers): State<Arc<ApiHandlers>>) -> impl IntoResponse {
    handlers.prometheus_metrics()
}

#[derive(Debug, Deserialize)]
pub struct ProblemRequest {
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub description: String,
    pub user_transfer_function: String,
}

async fn transfer_function_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    Json(request): Json<ProblemRequest>,
) -> Response {
    if let Err(response) = require_non_empty("description", &request.description) {
        return response;
    }

    envelope_response(
        handlers
            .generate_transfer_function_only(&request.description)
            .await,
    )
}

async fn full_analysis_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    Json(request): Json<ProblemRequest>,
) -> Response {
    if let Err(response) = require_non_empty("description", &request.description) {
        return response;
    }

    envelope_response(handlers.generate_full_analysis(&request.description).await)
}

async fn validation_handler(
    State(handlers): State<Arc<ApiHandlers>>,
    Json(request): Json<ValidationRequest>,
) -> Response {
    if let Err(response) = require_non_empty("description", &request.description) {
        return response;
    }
    if let Err(response) =
        require_non_empty("userTransferFunction", &request.user_transfer_function)
    {
        return response;
    }

    envelope_response(
        handlers
            .validate_user_answer(&request.description, &request.user_transfer_function)
            .await,
    )
}

/// Successful envelopes unwrap to the parsed data object; failures carry the
/// whole envelope with a 500.
fn envelope_response(envelope: LlmResponseEnvelope) -> Response {
    if envelope.success {
        let data = envelope.data.unwrap_or(Value::Null);
        (StatusCode::OK, Json(data)).into_response()
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), Response> {
    if value.trim().is_empty() {
        let envelope = LlmResponseEnvelope::transport(format!("{} must not be empty", field));
        return Err((StatusCode::BAD_REQUEST, Json(envelope)).into_response());
    }
    Ok(())
}
