use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Webhook service error variants.
#[derive(Debug, thiserror::Error)]
pub enum WebhookServiceError {
    #[error("webhook signature rejected")]
    SignatureRejected,
    #[error("malformed event payload")]
    MalformedPayload,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl WebhookServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SignatureRejected => "SIGNATURE_REJECTED",
            Self::MalformedPayload => "MALFORMED_PAYLOAD",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for WebhookServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::SignatureRejected => StatusCode::UNAUTHORIZED,
            Self::MalformedPayload => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 500 bodies stay generic; the store error is only logged.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
