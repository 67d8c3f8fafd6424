use anyhow::Context as _;
use reqwest::Client;

use crate::domain::repository::PushDeliveryPort;
use crate::domain::types::PushMessage;
use crate::error::PushServiceError;

/// HTTP client for the Expo-compatible push delivery API.
///
/// The API accepts a JSON array of messages per call; callers chunk to the
/// API's per-call limit before handing messages to [`PushDeliveryPort::send`].
#[derive(Clone)]
pub struct ExpoPushClient {
    http: Client,
    url: String,
    token: Option<String>,
}

impl ExpoPushClient {
    pub fn new(url: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            url,
            token,
        }
    }
}

impl PushDeliveryPort for ExpoPushClient {
    async fn send(&self, messages: &[PushMessage]) -> Result<(), PushServiceError> {
        let mut request = self.http.post(&self.url).json(messages);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.context("send push chunk")?;
        response
            .error_for_status()
            .context("push API rejected chunk")?;
        Ok(())
    }
}
