use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_metrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ip_hash: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub quiz_id: String,
    pub score: f64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
