use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "package")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub destination_id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub duration_days: i32,
    pub price: i64,
    pub discounted_price: Option<i64>,
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    pub gallery: Json,
    pub itinerary: Json,
    pub included: Json,
    pub excluded: Json,
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
        on_delete = "Cascade"
    )]
    Destination,
    #[sea_orm(has_many = "super::package_hotel::Entity")]
    PackageHotel,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        super::package_hotel::Relation::Hotel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::package_hotel::Relation::Package.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
