// src/routes/mod.rs
pub mod chat;
pub mod trip;

use std::convert::Infallible;

use crate::{message::HealthResponse, state::SharedState};
use axum::{
    Json, Router,
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::chat_handler;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use trip::calculate_trip_handler;

pub const SERVICE_NAME: &str = "TAXIUMS4 – Taxi API";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/calculate-trip", post(calculate_trip_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Full application: routes, state and the open CORS policy.
pub fn build_app(state: SharedState) -> Router {
    create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive())
}

// ServeFile answers 404 by itself when the page is missing.
async fn index_handler(State(state): State<SharedState>, req: Request) -> Response {
    let result: Result<_, Infallible> = ServeFile::new(&state.config.index_file).oneshot(req).await;
    match result {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    }
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
