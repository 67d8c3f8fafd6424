use sea_orm::entity::prelude::*;

/// Append-only audit trail of identity-driven mutations.
///
/// Rows are inserted in the same transaction as the mutation they describe
/// and are never updated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub table_name: String,
    pub record_id: String,
    pub action: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub old_data: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub new_data: Option<Json>,
    pub performed_by: String,
    pub performed_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
