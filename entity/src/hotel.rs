use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub destination_id: Option<i32>,
    pub city_id: Option<i32>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub address: Option<String>,
    pub stars: i32,
    pub base_price: i64,
    pub image_url: Option<String>,
    pub gallery: Json,
    pub amenities: Json,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Destination,
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    City,
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
    #[sea_orm(has_many = "super::package_hotel::Entity")]
    PackageHotel,
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::package::Entity> for Entity {
    fn to() -> RelationDef {
        super::package_hotel::Relation::Package.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::package_hotel::Relation::Hotel.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
