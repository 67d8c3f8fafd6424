use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use navette_core::health::{healthz, readyz};
use navette_core::middleware::request_id_layer;

use crate::handlers::dispatch::dispatch_broadcast;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Broadcast dispatch
        .route("/push/dispatch", post(dispatch_broadcast))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
