//! Package data repository.
//!
//! Packages own their hotel links in the `package_hotel` join table; `create` and `update`
//! write the package row and its links in one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, TransactionTrait,
};

use crate::server::model::{
    hotel::Hotel,
    package::{itinerary_value, Package, ProductFilter, SavePackageParams},
};
use crate::server::util::json::string_list_value;

pub struct PackageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PackageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a package under the resolved `slug` and links its hotels.
    ///
    /// # Arguments
    /// - `slug` - Final unique slug chosen by the service
    /// - `params` - Package fields and the hotel IDs to link
    ///
    /// # Returns
    /// - `Ok(Package)` - The created package
    /// - `Err(DbErr)` - Database error, including slug unique violations
    pub async fn create(&self, slug: String, params: &SavePackageParams) -> Result<Package, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::package::ActiveModel {
            destination_id: ActiveValue::Set(params.destination_id),
            title: ActiveValue::Set(params.title.clone()),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description.clone()),
            duration_days: ActiveValue::Set(params.duration_days),
            price: ActiveValue::Set(params.price),
            discounted_price: ActiveValue::Set(params.discounted_price),
            child_price: ActiveValue::Set(params.child_price),
            image_url: ActiveValue::Set(params.image_url.clone()),
            gallery: ActiveValue::Set(string_list_value(&params.gallery)),
            itinerary: ActiveValue::Set(itinerary_value(&params.itinerary)),
            included: ActiveValue::Set(string_list_value(&params.included)),
            excluded: ActiveValue::Set(string_list_value(&params.excluded)),
            featured: ActiveValue::Set(params.featured),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_hotels(&txn, entity.id, &params.hotel_ids).await?;
        txn.commit().await?;

        Ok(Package::from_entity(entity))
    }

    /// Replaces all editable fields and the full set of hotel links.
    ///
    /// # Returns
    /// - `Ok(Some(Package))` - Updated package
    /// - `Ok(None)` - No package with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        slug: String,
        params: &SavePackageParams,
    ) -> Result<Option<Package>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Package::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::package::ActiveModel = existing.into();
        active.destination_id = ActiveValue::Set(params.destination_id);
        active.title = ActiveValue::Set(params.title.clone());
        active.slug = ActiveValue::Set(slug);
        active.description = ActiveValue::Set(params.description.clone());
        active.duration_days = ActiveValue::Set(params.duration_days);
        active.price = ActiveValue::Set(params.price);
        active.discounted_price = ActiveValue::Set(params.discounted_price);
        active.child_price = ActiveValue::Set(params.child_price);
        active.image_url = ActiveValue::Set(params.image_url.clone());
        active.gallery = ActiveValue::Set(string_list_value(&params.gallery));
        active.itinerary = ActiveValue::Set(itinerary_value(&params.itinerary));
        active.included = ActiveValue::Set(string_list_value(&params.included));
        active.excluded = ActiveValue::Set(string_list_value(&params.excluded));
        active.featured = ActiveValue::Set(params.featured);
        active.active = ActiveValue::Set(params.active);
        let entity = active.update(&txn).await?;

        entity::prelude::PackageHotel::delete_many()
            .filter(entity::package_hotel::Column::PackageId.eq(id))
            .exec(&txn)
            .await?;
        link_hotels(&txn, id, &params.hotel_ids).await?;

        txn.commit().await?;

        Ok(Some(Package::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Package>, DbErr> {
        let entity = entity::prelude::Package::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Package::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Package>, DbErr> {
        let entity = entity::prelude::Package::find()
            .filter(entity::package::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Package::from_entity))
    }

    /// Checks whether a slug is used by any package other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let count = entity::prelude::Package::find()
            .filter(entity::package::Column::Slug.eq(slug))
            .apply_if(exclude_id, |query, id| {
                query.filter(entity::package::Column::Id.ne(id))
            })
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists packages matching the filter, featured first then newest.
    pub async fn get_all(&self, filter: ProductFilter) -> Result<Vec<Package>, DbErr> {
        let entities = entity::prelude::Package::find()
            .apply_if(filter.destination_id, |query, id| {
                query.filter(entity::package::Column::DestinationId.eq(id))
            })
            .apply_if(filter.featured, |query, featured| {
                query.filter(entity::package::Column::Featured.eq(featured))
            })
            .apply_if(filter.active_only.then_some(true), |query, active| {
                query.filter(entity::package::Column::Active.eq(active))
            })
            .order_by_desc(entity::package::Column::Featured)
            .order_by_desc(entity::package::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Package::from_entity).collect())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Package>, u64), DbErr> {
        let paginator = entity::prelude::Package::find()
            .order_by_desc(entity::package::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Package::from_entity).collect(), total))
    }

    /// Gets the hotels linked to a package, ordered by name.
    ///
    /// # Arguments
    /// - `package_id` - Package whose links to follow
    /// - `active_only` - Skip inactive hotels (public detail view)
    pub async fn get_hotels(&self, package_id: i32, active_only: bool) -> Result<Vec<Hotel>, DbErr> {
        let hotel_ids: Vec<i32> = entity::prelude::PackageHotel::find()
            .filter(entity::package_hotel::Column::PackageId.eq(package_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.hotel_id)
            .collect();

        if hotel_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Id.is_in(hotel_ids))
            .apply_if(active_only.then_some(true), |query, active| {
                query.filter(entity::hotel::Column::Active.eq(active))
            })
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Marks a package inactive.
    ///
    /// # Returns
    /// - `Ok(true)` - Package existed and was deactivated
    /// - `Ok(false)` - No package with that ID
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Package::update_many()
            .col_expr(
                entity::package::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::package::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Package::find().count(self.db).await
    }
}

async fn link_hotels<C>(conn: &C, package_id: i32, hotel_ids: &[i32]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    if hotel_ids.is_empty() {
        return Ok(());
    }

    let links = hotel_ids
        .iter()
        .map(|hotel_id| entity::package_hotel::ActiveModel {
            package_id: ActiveValue::Set(package_id),
            hotel_id: ActiveValue::Set(*hotel_id),
            ..Default::default()
        });

    entity::prelude::PackageHotel::insert_many(links)
        .exec(conn)
        .await?;

    Ok(())
}
