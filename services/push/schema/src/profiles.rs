use sea_orm::entity::prelude::*;

/// Read view over the provider-synced `profiles` table.
///
/// The push service filters on `push_token`, `deleted_at`, `role`, and
/// `notification_preferences`; it never writes this table.
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
