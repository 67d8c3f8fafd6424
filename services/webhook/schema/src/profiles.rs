use sea_orm::entity::prelude::*;

/// Application profile synced from the identity provider.
///
/// `clerk_id` is the provider subject and the upsert key; rows are soft
/// deleted by setting `deleted_at`, never removed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub clerk_id: String,
    pub role: String,
    pub name: String,
    pub email: String,
    pub disponible: bool,
    pub push_token: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub notification_preferences: Option<Json>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
