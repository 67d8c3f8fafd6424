use axum::{Json, extract::State};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::{Deserialize, Serialize};

use navette_domain::category::Category;
use navette_domain::role::Role;

use crate::domain::types::{Broadcast, TargetFilter};
use crate::error::PushServiceError;
use crate::state::AppState;
use crate::usecase::dispatch::DispatchBroadcastUseCase;
use crate::usecase::resolve::ResolveRecipientsUseCase;

// ── POST /push/dispatch ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    #[serde(default)]
    pub recipient_ids: Vec<String>,
    #[serde(default)]
    pub recipient_role: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum DispatchResponse {
    Delivered {
        sent: usize,
        #[serde(rename = "inApp")]
        in_app: usize,
    },
    NoRecipients {
        sent: usize,
        message: String,
    },
}

pub async fn dispatch_broadcast(
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    State(state): State<AppState>,
    Json(body): Json<DispatchRequest>,
) -> Result<Json<DispatchResponse>, PushServiceError> {
    // Presence-only check: callers are internal services holding an opaque token.
    if bearer.is_none() {
        return Err(PushServiceError::Unauthorized);
    }

    let category = body
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or(PushServiceError::MissingData)
        .and_then(|raw| Category::parse(raw).ok_or(PushServiceError::InvalidCategory))?;
    let title = body
        .title
        .filter(|t| !t.is_empty())
        .ok_or(PushServiceError::MissingData)?;
    let message = body
        .message
        .filter(|m| !m.is_empty())
        .ok_or(PushServiceError::MissingData)?;

    let filter = if body.recipient_ids.is_empty() {
        match body.recipient_role.as_deref() {
            None | Some("all") => TargetFilter::All,
            Some(raw) => Role::parse(raw)
                .map(TargetFilter::Role)
                .ok_or(PushServiceError::InvalidRole)?,
        }
    } else {
        TargetFilter::Subjects(body.recipient_ids)
    };

    let resolver = ResolveRecipientsUseCase {
        repo: state.profile_repo(),
    };
    let recipients = resolver.execute(&filter, category).await?;
    if recipients.is_empty() {
        return Ok(Json(DispatchResponse::NoRecipients {
            sent: 0,
            message: "No eligible recipients found".to_owned(),
        }));
    }

    let broadcast = Broadcast {
        category,
        title,
        message,
        data: body.data,
    };
    let dispatcher = DispatchBroadcastUseCase {
        push: state.push_client(),
        notifications: state.notification_repo(),
    };
    let outcome = dispatcher.execute(&broadcast, &recipients).await?;
    Ok(Json(DispatchResponse::Delivered {
        sent: outcome.sent,
        in_app: outcome.in_app,
    }))
}
