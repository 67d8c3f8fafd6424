/// Webhook service configuration loaded from environment variables.
#[derive(Debug)]
pub struct WebhookConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Shared identity-provider webhook secret (`whsec_` + base64 key bytes).
    pub webhook_secret: String,
    /// TCP port for the HTTP server (default 3117). Env var: `WEBHOOK_PORT`.
    pub webhook_port: u16,
}

impl WebhookConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            webhook_secret: std::env::var("CLERK_WEBHOOK_SECRET").expect("CLERK_WEBHOOK_SECRET"),
            webhook_port: std::env::var("WEBHOOK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3117),
        }
    }
}
