#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::{AuditEntry, Profile};
use crate::error::WebhookServiceError;

/// Repository for provider-synced profiles and their audit trail.
///
/// Every mutating method writes the profile change and the audit entry in a
/// single transaction, so the audit trail never misses a mutation.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_subject(&self, subject: &str)
    -> Result<Option<Profile>, WebhookServiceError>;

    /// Insert-or-update keyed on the provider subject. Replaying the same
    /// event must not create a second row.
    async fn upsert_with_audit(
        &self,
        profile: &Profile,
        entry: &AuditEntry,
    ) -> Result<(), WebhookServiceError>;

    /// Update contact fields only (name, email). Tolerates a missing row;
    /// the audit entry is written regardless.
    async fn update_contact_with_audit(
        &self,
        subject: &str,
        name: &str,
        email: &str,
        updated_at: DateTime<Utc>,
        entry: &AuditEntry,
    ) -> Result<(), WebhookServiceError>;

    /// Soft delete: set `deleted_at`, never remove the row. Tolerates a
    /// missing row; the audit entry is written regardless.
    async fn soft_delete_with_audit(
        &self,
        subject: &str,
        deleted_at: DateTime<Utc>,
        entry: &AuditEntry,
    ) -> Result<(), WebhookServiceError>;
}
