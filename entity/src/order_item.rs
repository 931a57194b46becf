use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ItemType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub item_type: ItemType,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub travel_date: Option<Date>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub unit_price: i64,
    pub total_price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
