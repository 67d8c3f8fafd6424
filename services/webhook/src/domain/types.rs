use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use navette_domain::role::Role;

use crate::error::WebhookServiceError;

/// Profile row synced from the identity provider.
///
/// Serializes in the persisted column shape (`clerk_id`, `push_token`, ...)
/// so audit snapshots match what a reader of the table would see.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(rename = "clerk_id")]
    pub subject: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub disponible: bool,
    pub push_token: Option<String>,
    pub notification_preferences: Option<Value>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Audit action recorded for a profile mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
}

impl AuditAction {
    /// Wire string stored in `audit_log.action`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

/// Append-only audit record written alongside every profile mutation.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: Uuid,
    pub table_name: String,
    pub record_id: String,
    pub action: AuditAction,
    pub old_data: Option<Value>,
    pub new_data: Option<Value>,
    pub performed_by: String,
    pub performed_at: DateTime<Utc>,
}

/// Identity lifecycle event parsed from a verified webhook body.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityEvent {
    Created {
        subject: String,
        email: String,
        first_name: Option<String>,
        role_hint: Option<Role>,
    },
    Updated {
        subject: String,
        email: String,
        first_name: Option<String>,
    },
    Deleted {
        subject: String,
    },
}

// Provider-shaped payload structs. Only the fields the sync consumes are
// declared; everything else in the provider object is ignored.

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

#[derive(Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    email_addresses: Vec<ProviderEmail>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    unsafe_metadata: ProviderMetadata,
}

#[derive(Deserialize)]
struct ProviderEmail {
    email_address: String,
}

#[derive(Deserialize, Default)]
struct ProviderMetadata {
    #[serde(default)]
    role: Option<String>,
}

#[derive(Deserialize)]
struct ProviderDeletedUser {
    id: String,
}

impl IdentityEvent {
    /// Parse a verified webhook body.
    ///
    /// Returns `Ok(None)` for event kinds the sync does not handle — the
    /// caller acknowledges those without side effects. A body that is not
    /// JSON, or a known kind missing required provider fields, is a
    /// [`WebhookServiceError::MalformedPayload`].
    pub fn parse(body: &str) -> Result<Option<Self>, WebhookServiceError> {
        let envelope: Envelope =
            serde_json::from_str(body).map_err(|_| WebhookServiceError::MalformedPayload)?;
        match envelope.kind.as_str() {
            "user.created" => {
                let user: ProviderUser = serde_json::from_value(envelope.data)
                    .map_err(|_| WebhookServiceError::MalformedPayload)?;
                let role_hint = user
                    .unsafe_metadata
                    .role
                    .as_deref()
                    .and_then(Role::parse);
                Ok(Some(Self::Created {
                    subject: user.id,
                    email: primary_email(&user.email_addresses),
                    first_name: user.first_name,
                    role_hint,
                }))
            }
            "user.updated" => {
                let user: ProviderUser = serde_json::from_value(envelope.data)
                    .map_err(|_| WebhookServiceError::MalformedPayload)?;
                Ok(Some(Self::Updated {
                    subject: user.id,
                    email: primary_email(&user.email_addresses),
                    first_name: user.first_name,
                }))
            }
            "user.deleted" => {
                let user: ProviderDeletedUser = serde_json::from_value(envelope.data)
                    .map_err(|_| WebhookServiceError::MalformedPayload)?;
                Ok(Some(Self::Deleted { subject: user.id }))
            }
            _ => Ok(None),
        }
    }
}

fn primary_email(addresses: &[ProviderEmail]) -> String {
    addresses
        .first()
        .map(|a| a.email_address.clone())
        .unwrap_or_default()
}
