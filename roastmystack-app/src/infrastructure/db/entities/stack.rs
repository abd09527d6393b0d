use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub auth: Option<String>,
    pub hosting: Option<String>,
    pub styling: Option<String>,
    pub misc: Option<String>,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roast::Entity")]
    Roasts,
}

impl Related<super::roast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roasts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
