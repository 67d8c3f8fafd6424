use axum::{Json, extract::State, http::HeaderMap};
use chrono::Utc;
use serde::Serialize;

use crate::domain::types::IdentityEvent;
use crate::error::WebhookServiceError;
use crate::state::AppState;
use crate::usecase::identity_event::ProcessIdentityEventUseCase;
use crate::verify::{
    self, HEADER_MESSAGE_ID, HEADER_SIGNATURE, HEADER_TIMESTAMP, SignedHeaders,
};

// ── POST /webhooks/clerk ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReceivedResponse {
    pub received: bool,
}

pub async fn receive_clerk_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<ReceivedResponse>, WebhookServiceError> {
    // Fail closed: verification sees the exact wire bytes the parser sees.
    let signed = SignedHeaders {
        message_id: required_header(&headers, HEADER_MESSAGE_ID)?,
        timestamp: required_header(&headers, HEADER_TIMESTAMP)?,
        signatures: required_header(&headers, HEADER_SIGNATURE)?,
    };
    verify::verify(&state.webhook_secret, &signed, &body, Utc::now()).map_err(|error| {
        tracing::warn!(error = %error, "webhook delivery rejected");
        WebhookServiceError::SignatureRejected
    })?;

    let Some(event) = IdentityEvent::parse(&body)? else {
        // Event kinds the sync does not handle are acknowledged as received,
        // with no side effects.
        return Ok(Json(ReceivedResponse { received: true }));
    };

    let usecase = ProcessIdentityEventUseCase {
        repo: state.profile_repo(),
    };
    usecase.execute(event).await?;
    Ok(Json(ReceivedResponse { received: true }))
}

fn required_header<'a>(
    headers: &'a HeaderMap,
    name: &str,
) -> Result<&'a str, WebhookServiceError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookServiceError::SignatureRejected)
}
