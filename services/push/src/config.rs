/// Push service configuration loaded from environment variables.
#[derive(Debug)]
pub struct PushConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Endpoint of the Expo-compatible push delivery API. Env var:
    /// `PUSH_API_URL`, defaulting to the public Expo endpoint.
    pub push_api_url: String,
    /// Optional bearer token for the push delivery API. Env var: `PUSH_API_TOKEN`.
    pub push_api_token: Option<String>,
    /// TCP port for the HTTP server (default 3118). Env var: `PUSH_PORT`.
    pub push_port: u16,
}

impl PushConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            push_api_url: std::env::var("PUSH_API_URL")
                .unwrap_or_else(|_| "https://exp.host/--/api/v2/push/send".to_owned()),
            push_api_token: std::env::var("PUSH_API_TOKEN").ok(),
            push_port: std::env::var("PUSH_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3118),
        }
    }
}
