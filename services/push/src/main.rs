use sea_orm::Database;
use tracing::info;

use navette_push::config::PushConfig;
use navette_push::infra::expo::ExpoPushClient;
use navette_push::router::build_router;
use navette_push::state::AppState;

#[tokio::main]
async fn main() {
    navette_core::tracing::init_tracing();

    let config = PushConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let push = ExpoPushClient::new(config.push_api_url.clone(), config.push_api_token.clone());
    let state = AppState { db, push };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.push_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("push service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
