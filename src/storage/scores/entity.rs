use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User score database model
///
/// `data` is an opaque JSON blob of per-domain correct/total counters
/// owned by the frontend; the service never interprets it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_scores")]
pub struct Model {
    /// Client-generated opaque user id
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    /// Opaque score blob
    pub data: Json,

    /// Last write timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
