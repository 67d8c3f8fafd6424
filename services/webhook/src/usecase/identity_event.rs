use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use navette_domain::role::Role;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{AuditAction, AuditEntry, IdentityEvent, Profile};
use crate::error::WebhookServiceError;

/// Fixed actor recorded in `audit_log.performed_by` for every mutation the
/// webhook applies. The webhook acts for the system, not for the affected user.
pub const WEBHOOK_ACTOR: &str = "clerk-webhook";

/// Display name used when the provider sends neither a first name nor an email.
pub const DEFAULT_NAME: &str = "Utilisateur";

const PROFILES_TABLE: &str = "profiles";

// ── ProcessIdentityEvent ─────────────────────────────────────────────────────

pub struct ProcessIdentityEventUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> ProcessIdentityEventUseCase<R> {
    pub async fn execute(&self, event: IdentityEvent) -> Result<(), WebhookServiceError> {
        match event {
            IdentityEvent::Created {
                subject,
                email,
                first_name,
                role_hint,
            } => self.created(subject, email, first_name, role_hint).await,
            IdentityEvent::Updated {
                subject,
                email,
                first_name,
            } => self.updated(subject, email, first_name).await,
            IdentityEvent::Deleted { subject } => self.deleted(subject).await,
        }
    }

    async fn created(
        &self,
        subject: String,
        email: String,
        first_name: Option<String>,
        role_hint: Option<Role>,
    ) -> Result<(), WebhookServiceError> {
        let now = Utc::now();
        let role = role_hint.unwrap_or(Role::Client);
        let profile = Profile {
            id: Uuid::now_v7(),
            subject: subject.clone(),
            name: derive_name(first_name.as_deref(), &email),
            email,
            role,
            disponible: role == Role::Chauffeur,
            push_token: None,
            notification_preferences: None,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        let entry = audit_entry(
            AuditAction::Insert,
            &subject,
            None,
            Some(snapshot(&profile)?),
            now,
        );
        self.repo.upsert_with_audit(&profile, &entry).await
    }

    async fn updated(
        &self,
        subject: String,
        email: String,
        first_name: Option<String>,
    ) -> Result<(), WebhookServiceError> {
        let now = Utc::now();
        let name = derive_name(first_name.as_deref(), &email);
        let existing = self.repo.find_by_subject(&subject).await?;
        let new_data = match &existing {
            Some(profile) => {
                let mut updated = profile.clone();
                updated.name = name.clone();
                updated.email = email.clone();
                updated.updated_at = now;
                snapshot(&updated)?
            }
            // No matching row: the mutation is a no-op, but the intended
            // contact state is still worth auditing.
            None => serde_json::json!({ "clerk_id": subject, "name": name, "email": email }),
        };
        let old_data = existing.as_ref().map(snapshot).transpose()?;
        let entry = audit_entry(AuditAction::Update, &subject, old_data, Some(new_data), now);
        self.repo
            .update_contact_with_audit(&subject, &name, &email, now, &entry)
            .await
    }

    async fn deleted(&self, subject: String) -> Result<(), WebhookServiceError> {
        let now = Utc::now();
        let existing = self.repo.find_by_subject(&subject).await?;
        let old_data = existing.as_ref().map(snapshot).transpose()?;
        let entry = audit_entry(AuditAction::Delete, &subject, old_data, None, now);
        self.repo.soft_delete_with_audit(&subject, now, &entry).await
    }
}

/// Display name fallback chain: provider first name, then the local part of
/// the email, then the fixed default. Empty strings fall through.
pub fn derive_name(first_name: Option<&str>, email: &str) -> String {
    if let Some(name) = first_name {
        if !name.is_empty() {
            return name.to_owned();
        }
    }
    let local = email.split('@').next().unwrap_or("");
    if local.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        local.to_owned()
    }
}

fn snapshot(profile: &Profile) -> Result<Value, WebhookServiceError> {
    Ok(serde_json::to_value(profile).context("serialize profile snapshot")?)
}

fn audit_entry(
    action: AuditAction,
    subject: &str,
    old_data: Option<Value>,
    new_data: Option<Value>,
    at: DateTime<Utc>,
) -> AuditEntry {
    AuditEntry {
        id: Uuid::now_v7(),
        table_name: PROFILES_TABLE.to_owned(),
        record_id: subject.to_owned(),
        action,
        old_data,
        new_data,
        performed_by: WEBHOOK_ACTOR.to_owned(),
        performed_at: at,
    }
}
