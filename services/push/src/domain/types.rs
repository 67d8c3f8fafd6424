use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use navette_domain::category::{Category, IconStyle};
use navette_domain::role::Role;

/// Recipient targeting for a broadcast. Explicit subjects win over the role
/// filter; `All` reaches every profile that passes the reachability filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetFilter {
    Subjects(Vec<String>),
    Role(Role),
    All,
}

/// Profile row as the resolver sees it: push token present, not soft-deleted.
#[derive(Debug, Clone)]
pub struct ReachableProfile {
    pub subject: String,
    pub role: Role,
    pub push_token: String,
    pub notification_preferences: Option<Value>,
}

/// A resolved broadcast recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub subject: String,
    pub role: Role,
    pub push_token: String,
}

/// Broadcast content shared by every recipient.
#[derive(Debug, Clone)]
pub struct Broadcast {
    pub category: Category,
    pub title: String,
    pub message: String,
    pub data: Option<Value>,
}

/// One message handed to the push delivery API, in its wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct PushMessage {
    pub to: String,
    pub title: String,
    pub body: String,
    pub sound: String,
    pub data: Value,
}

/// In-app notification row persisted for one recipient of a broadcast.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub id: Uuid,
    pub category: Category,
    pub title: String,
    pub message: String,
    pub style: IconStyle,
    pub recipient_subject: String,
    pub recipient_role: Role,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
