use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ItemType;

/// Item pending checkout, owned either by a user or by a guest session token.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub guest_token: Option<String>,
    pub item_type: ItemType,
    /// Id of the referenced package, tour, hotel, room or visa.
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub travel_date: Option<Date>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub transport_type_id: Option<i32>,
    pub unit_price: i64,
    pub total_price: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
