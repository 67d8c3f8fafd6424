use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Push service error variants.
#[derive(Debug, thiserror::Error)]
pub enum PushServiceError {
    #[error("missing bearer token")]
    Unauthorized,
    #[error("missing data")]
    MissingData,
    #[error("invalid category")]
    InvalidCategory,
    #[error("invalid recipient role")]
    InvalidRole,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PushServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidCategory => "INVALID_CATEGORY",
            Self::InvalidRole => "INVALID_ROLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PushServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingData | Self::InvalidCategory | Self::InvalidRole => {
                StatusCode::BAD_REQUEST
            }
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
