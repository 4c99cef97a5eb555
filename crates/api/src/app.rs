use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::gql::{execute, QueryRequest};
use crate::state::AppState;

/// Build the axum router: liveness probe plus the query endpoint.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graphql", post(graphql_handler).get(sdl_handler))
        .with_state(state)
        // Useful default middlewares
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    let allowed_origins = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Decodes the request body into a `QueryRequest` and resolves it against
/// the composed dispatch table. Field failures surface inside the response
/// body, not as HTTP errors.
async fn graphql_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let body_bytes = axum::body::to_bytes(req.into_body(), 2 * 1024 * 1024)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {e}")))?;

    let request: QueryRequest = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid query request: {e}")))?;

    let response = execute(state.table(), state.store.clone(), request).await;
    Ok(Json(response).into_response())
}

/// Serves the composed SDL text. Gated behind `GQL_INTROSPECTION`.
async fn sdl_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    if !state.introspection_enabled() {
        return Err(AppError::NotFound);
    }
    Ok(state.schema().sdl().into_response())
}

/// Liveness check.
async fn health() -> &'static str {
    "ok"
}
