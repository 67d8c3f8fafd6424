use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use navette_domain::category::IconStyle;

use crate::domain::repository::{NotificationRepository, PushDeliveryPort};
use crate::domain::types::{Broadcast, NotificationRecord, PushMessage, Recipient};
use crate::error::PushServiceError;

/// Maximum messages per push API call (the delivery API's per-call limit).
pub const PUSH_CHUNK_SIZE: usize = 100;

/// Maximum notification rows per bulk insert (the store's statement limit —
/// deliberately distinct from the push chunk size).
pub const INSERT_BATCH_SIZE: usize = 500;

/// Counters reported back to the caller, computed independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Tokens a push was sent for (not the number of chunks).
    pub sent: usize,
    /// In-app notification rows inserted.
    pub in_app: usize,
}

// ── DispatchBroadcast ────────────────────────────────────────────────────────

pub struct DispatchBroadcastUseCase<P: PushDeliveryPort, N: NotificationRepository> {
    pub push: P,
    pub notifications: N,
}

impl<P: PushDeliveryPort, N: NotificationRepository> DispatchBroadcastUseCase<P, N> {
    /// Deliver a broadcast to already-resolved recipients and persist one
    /// in-app notification per recipient.
    ///
    /// Delivery is at-least-once and best-effort: a failed chunk is logged
    /// and the loop continues; nothing already sent is rolled back. A store
    /// error on insert still propagates — pushes sent before it stay sent.
    pub async fn execute(
        &self,
        broadcast: &Broadcast,
        recipients: &[Recipient],
    ) -> Result<DispatchOutcome, PushServiceError> {
        let style = broadcast.category.icon();

        let messages: Vec<PushMessage> = recipients
            .iter()
            .map(|recipient| push_message(broadcast, style, recipient))
            .collect();
        for chunk in messages.chunks(PUSH_CHUNK_SIZE) {
            if let Err(error) = self.push.send(chunk).await {
                tracing::warn!(error = %error, chunk_len = chunk.len(), "push chunk delivery failed");
            }
        }
        let sent = messages.len();

        let now = Utc::now();
        let records: Vec<NotificationRecord> = recipients
            .iter()
            .map(|recipient| notification_record(broadcast, style, recipient, now))
            .collect();
        for batch in records.chunks(INSERT_BATCH_SIZE) {
            self.notifications.insert_batch(batch).await?;
        }
        let in_app = records.len();

        Ok(DispatchOutcome { sent, in_app })
    }
}

fn push_message(broadcast: &Broadcast, style: IconStyle, recipient: &Recipient) -> PushMessage {
    let mut data = Map::new();
    if let Some(Value::Object(extra)) = &broadcast.data {
        data.extend(extra.clone());
    }
    data.insert("category".to_owned(), json!(broadcast.category.as_str()));
    data.insert("icon".to_owned(), json!(style.icon));
    data.insert("iconColor".to_owned(), json!(style.color));
    data.insert("iconBg".to_owned(), json!(style.background));
    PushMessage {
        to: recipient.push_token.clone(),
        title: broadcast.title.clone(),
        body: broadcast.message.clone(),
        sound: "default".to_owned(),
        data: Value::Object(data),
    }
}

fn notification_record(
    broadcast: &Broadcast,
    style: IconStyle,
    recipient: &Recipient,
    at: DateTime<Utc>,
) -> NotificationRecord {
    NotificationRecord {
        id: Uuid::now_v7(),
        category: broadcast.category,
        title: broadcast.title.clone(),
        message: broadcast.message.clone(),
        style,
        recipient_subject: recipient.subject.clone(),
        recipient_role: recipient.role,
        read: false,
        created_at: at,
    }
}
