use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use navette_core::health::{healthz, readyz};
use navette_core::middleware::request_id_layer;

use crate::handlers::clerk::receive_clerk_event;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Identity provider webhook
        .route("/webhooks/clerk", post(receive_clerk_event))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
