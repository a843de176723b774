//! HTTP transport.
//!
//! Routes:
//! - `GET /` liveness probe, answers `{"Ping": "Pong"}`
//! - `POST /pipelines/parse` validates a [`SerializedPipeline`] and answers
//!   with a [`PipelineResponse`]
//!
//! Malformed bodies are rejected by the `Json` extractor before the
//! validator runs. An edge naming an unknown node answers 422.

use crate::config::ServerConfig;
use crate::core::error::{GraphError, PipecheckResult};
use crate::graph::serialization::{PipelineResponse, SerializedPipeline};
use crate::validation::pipeline::ValidationPipeline;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Clone)]
struct AppState {
    validator: Arc<ValidationPipeline>,
}

/// Error answered to the client.
#[derive(Debug)]
pub struct ApiError(GraphError);

impl From<GraphError> for ApiError {
    fn from(error: GraphError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.0.to_string() });
        if let Some(fix) = self.0.suggested_fix() {
            body["suggestion"] = json!(fix);
        }
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Build the application router with the default validator.
pub fn router(config: &ServerConfig) -> Router {
    router_with(config, ValidationPipeline::default())
}

/// Build the application router around a specific validator.
pub fn router_with(config: &ServerConfig, validator: ValidationPipeline) -> Router {
    let state = AppState {
        validator: Arc::new(validator),
    };

    Router::new()
        .route("/", get(ping))
        .route("/pipelines/parse", post(parse_pipeline))
        .layer(cors_layer(config))
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> PipecheckResult<()> {
    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    log::info!("pipecheck listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("pipecheck stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("shutdown requested");
}

/// Credentials are always allowed. Browsers refuse `*` alongside
/// credentials, so a wildcard config echoes the request's origin and the
/// method and headers are always mirrored.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    if config.allows_any_origin() {
        return layer.allow_origin(AllowOrigin::mirror_request());
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "Ping": "Pong" }))
}

async fn parse_pipeline(
    State(state): State<AppState>,
    Json(body): Json<SerializedPipeline>,
) -> Result<Json<PipelineResponse>, ApiError> {
    let name = body.pipeline.as_deref().unwrap_or("<unnamed>");
    match body.validate_with(&state.validator) {
        Ok(response) => {
            log::info!(
                "pipeline {}: {} node(s), {} edge(s), dag={}",
                name,
                response.num_nodes,
                response.num_edges,
                response.is_dag
            );
            Ok(Json(response))
        }
        Err(error) => {
            log::warn!("pipeline {} rejected: {}", name, error);
            Err(error.into())
        }
    }
}
