use sea_orm::Database;
use tracing::info;

use navette_webhook::config::WebhookConfig;
use navette_webhook::router::build_router;
use navette_webhook::state::AppState;

#[tokio::main]
async fn main() {
    navette_core::tracing::init_tracing();

    let config = WebhookConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        webhook_secret: config.webhook_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.webhook_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("webhook service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
