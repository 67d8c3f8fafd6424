#![allow(async_fn_in_trait)]

use crate::domain::types::{NotificationRecord, PushMessage, ReachableProfile, TargetFilter};
use crate::error::PushServiceError;

/// Read-side repository over the provider-synced `profiles` table.
pub trait ProfileRepository: Send + Sync {
    /// Rows with a registered push token and no soft-delete marker, narrowed
    /// by `filter`. Preference filtering happens in the use case, not here.
    async fn find_reachable(
        &self,
        filter: &TargetFilter,
    ) -> Result<Vec<ReachableProfile>, PushServiceError>;
}

/// Repository for in-app notification rows.
pub trait NotificationRepository: Send + Sync {
    /// Insert one batch of rows. Callers chunk; a batch is never empty.
    async fn insert_batch(&self, records: &[NotificationRecord]) -> Result<(), PushServiceError>;
}

/// Outbound port to the push delivery API. One call per chunk.
pub trait PushDeliveryPort: Send + Sync {
    async fn send(&self, messages: &[PushMessage]) -> Result<(), PushServiceError>;
}
