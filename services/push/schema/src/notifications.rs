use sea_orm::entity::prelude::*;

/// In-app notification row, one per (recipient, broadcast) pair.
///
/// `read` is flipped later by the client application; the push service only
/// ever bulk-inserts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub icon_color: String,
    pub icon_bg: String,
    pub recipient_id: Option<String>,
    pub recipient_role: Option<String>,
    pub read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
