use sea_orm::DatabaseConnection;

use crate::infra::db::{DbNotificationRepository, DbProfileRepository};
use crate::infra::expo::ExpoPushClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub push: ExpoPushClient,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn push_client(&self) -> ExpoPushClient {
        self.push.clone()
    }
}
