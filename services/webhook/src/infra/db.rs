use anyhow::{Context as _, anyhow};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use navette_domain::role::Role;
use navette_webhook_schema::{audit_log, profiles};

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{AuditEntry, Profile};
use crate::error::WebhookServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<Profile>, WebhookServiceError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::ClerkId.eq(subject))
            .one(&self.db)
            .await
            .context("find profile by subject")?;
        model.map(profile_from_model).transpose()
    }

    async fn upsert_with_audit(
        &self,
        profile: &Profile,
        entry: &AuditEntry,
    ) -> Result<(), WebhookServiceError> {
        let profile = profile.clone();
        let entry = entry.clone();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    upsert_profile(txn, &profile).await?;
                    insert_audit_entry(txn, &entry).await?;
                    Ok(())
                })
            })
            .await
            .context("upsert profile with audit")?;
        Ok(())
    }

    async fn update_contact_with_audit(
        &self,
        subject: &str,
        name: &str,
        email: &str,
        updated_at: DateTime<Utc>,
        entry: &AuditEntry,
    ) -> Result<(), WebhookServiceError> {
        let subject = subject.to_owned();
        let name = name.to_owned();
        let email = email.to_owned();
        let entry = entry.clone();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    // Zero matched rows is fine: the sync is best-effort for
                    // profiles that never reached this store.
                    profiles::Entity::update_many()
                        .col_expr(profiles::Column::Name, Expr::value(name))
                        .col_expr(profiles::Column::Email, Expr::value(email))
                        .col_expr(profiles::Column::UpdatedAt, Expr::value(updated_at))
                        .filter(profiles::Column::ClerkId.eq(subject))
                        .exec(txn)
                        .await?;
                    insert_audit_entry(txn, &entry).await?;
                    Ok(())
                })
            })
            .await
            .context("update profile contact with audit")?;
        Ok(())
    }

    async fn soft_delete_with_audit(
        &self,
        subject: &str,
        deleted_at: DateTime<Utc>,
        entry: &AuditEntry,
    ) -> Result<(), WebhookServiceError> {
        let subject = subject.to_owned();
        let entry = entry.clone();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    profiles::Entity::update_many()
                        .col_expr(profiles::Column::DeletedAt, Expr::value(Some(deleted_at)))
                        .col_expr(profiles::Column::UpdatedAt, Expr::value(deleted_at))
                        .filter(profiles::Column::ClerkId.eq(subject))
                        .exec(txn)
                        .await?;
                    insert_audit_entry(txn, &entry).await?;
                    Ok(())
                })
            })
            .await
            .context("soft delete profile with audit")?;
        Ok(())
    }
}

async fn upsert_profile(txn: &DatabaseTransaction, profile: &Profile) -> Result<(), sea_orm::DbErr> {
    let model = profiles::ActiveModel {
        id: Set(profile.id),
        clerk_id: Set(profile.subject.clone()),
        role: Set(profile.role.as_str().to_owned()),
        name: Set(profile.name.clone()),
        email: Set(profile.email.clone()),
        disponible: Set(profile.disponible),
        push_token: Set(profile.push_token.clone()),
        notification_preferences: Set(profile.notification_preferences.clone()),
        deleted_at: Set(profile.deleted_at),
        created_at: Set(profile.created_at),
        updated_at: Set(profile.updated_at),
    };
    // Replayed created events update in place instead of duplicating; token
    // and preference columns are owned by the app and left untouched.
    profiles::Entity::insert(model)
        .on_conflict(
            OnConflict::column(profiles::Column::ClerkId)
                .update_columns([
                    profiles::Column::Name,
                    profiles::Column::Email,
                    profiles::Column::Role,
                    profiles::Column::Disponible,
                    profiles::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(txn)
        .await?;
    Ok(())
}

async fn insert_audit_entry(
    txn: &DatabaseTransaction,
    entry: &AuditEntry,
) -> Result<(), sea_orm::DbErr> {
    audit_log::ActiveModel {
        id: Set(entry.id),
        table_name: Set(entry.table_name.clone()),
        record_id: Set(entry.record_id.clone()),
        action: Set(entry.action.as_str().to_owned()),
        old_data: Set(entry.old_data.clone()),
        new_data: Set(entry.new_data.clone()),
        performed_by: Set(entry.performed_by.clone()),
        performed_at: Set(entry.performed_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn profile_from_model(model: profiles::Model) -> Result<Profile, WebhookServiceError> {
    let role = Role::parse(&model.role)
        .ok_or_else(|| anyhow!("unknown role {:?} on profile {}", model.role, model.id))?;
    Ok(Profile {
        id: model.id,
        subject: model.clerk_id,
        name: model.name,
        email: model.email,
        role,
        disponible: model.disponible,
        push_token: model.push_token,
        notification_preferences: model.notification_preferences,
        deleted_at: model.deleted_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
