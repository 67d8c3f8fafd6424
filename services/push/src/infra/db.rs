use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use navette_domain::role::Role;
use navette_push_schema::{notifications, profiles};

use crate::domain::repository::{NotificationRepository, ProfileRepository};
use crate::domain::types::{NotificationRecord, ReachableProfile, TargetFilter};
use crate::error::PushServiceError;

// ── Profile repository (read side) ───────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_reachable(
        &self,
        filter: &TargetFilter,
    ) -> Result<Vec<ReachableProfile>, PushServiceError> {
        let mut query = profiles::Entity::find()
            .filter(profiles::Column::PushToken.is_not_null())
            .filter(profiles::Column::DeletedAt.is_null());
        query = match filter {
            TargetFilter::Subjects(subjects) => {
                query.filter(profiles::Column::ClerkId.is_in(subjects.iter().cloned()))
            }
            TargetFilter::Role(role) => query.filter(profiles::Column::Role.eq(role.as_str())),
            TargetFilter::All => query,
        };
        let models = query
            .all(&self.db)
            .await
            .context("find reachable profiles")?;
        models
            .into_iter()
            .map(reachable_from_model)
            .filter_map(Result::transpose)
            .collect()
    }
}

fn reachable_from_model(
    model: profiles::Model,
) -> Result<Option<ReachableProfile>, PushServiceError> {
    // The query filters on token presence; rows that lost theirs between
    // query and mapping are skipped rather than failed.
    let Some(push_token) = model.push_token else {
        return Ok(None);
    };
    let role = Role::parse(&model.role)
        .ok_or_else(|| anyhow!("unknown role {:?} on profile {}", model.role, model.id))?;
    Ok(Some(ReachableProfile {
        subject: model.clerk_id,
        role,
        push_token,
        notification_preferences: model.notification_preferences,
    }))
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn insert_batch(&self, records: &[NotificationRecord]) -> Result<(), PushServiceError> {
        let models = records.iter().map(|record| notifications::ActiveModel {
            id: Set(record.id),
            kind: Set(record.category.as_str().to_owned()),
            title: Set(record.title.clone()),
            message: Set(record.message.clone()),
            icon: Set(record.style.icon.to_owned()),
            icon_color: Set(record.style.color.to_owned()),
            icon_bg: Set(record.style.background.to_owned()),
            recipient_id: Set(Some(record.recipient_subject.clone())),
            recipient_role: Set(Some(record.recipient_role.as_str().to_owned())),
            read: Set(record.read),
            created_at: Set(record.created_at),
        });
        notifications::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .context("insert notification batch")?;
        Ok(())
    }
}
