use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "agent_commission_split", schema_name = "public")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub agent_id: Uuid,
    pub parent_agent_id: Option<Uuid>,
    pub transaction_reference: String,
    pub transaction_amount: Decimal,
    pub base_commission_rate: Decimal,
    pub parent_share: Decimal,
    pub total_commission: Decimal,
    pub parent_portion: Decimal,
    pub sub_agent_portion: Decimal,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
