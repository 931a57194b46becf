//! Tour data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::{
    package::ProductFilter,
    tour::{SaveTourParams, Tour},
};
use crate::server::util::json::string_list_value;

pub struct TourRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, slug: String, params: &SaveTourParams) -> Result<Tour, DbErr> {
        let entity = entity::tour::ActiveModel {
            destination_id: ActiveValue::Set(params.destination_id),
            title: ActiveValue::Set(params.title.clone()),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description.clone()),
            duration_hours: ActiveValue::Set(params.duration_hours),
            price: ActiveValue::Set(params.price),
            child_price: ActiveValue::Set(params.child_price),
            image_url: ActiveValue::Set(params.image_url.clone()),
            gallery: ActiveValue::Set(string_list_value(&params.gallery)),
            featured: ActiveValue::Set(params.featured),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tour::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        slug: String,
        params: &SaveTourParams,
    ) -> Result<Option<Tour>, DbErr> {
        let Some(existing) = entity::prelude::Tour::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::tour::ActiveModel = existing.into();
        active.destination_id = ActiveValue::Set(params.destination_id);
        active.title = ActiveValue::Set(params.title.clone());
        active.slug = ActiveValue::Set(slug);
        active.description = ActiveValue::Set(params.description.clone());
        active.duration_hours = ActiveValue::Set(params.duration_hours);
        active.price = ActiveValue::Set(params.price);
        active.child_price = ActiveValue::Set(params.child_price);
        active.image_url = ActiveValue::Set(params.image_url.clone());
        active.gallery = ActiveValue::Set(string_list_value(&params.gallery));
        active.featured = ActiveValue::Set(params.featured);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Tour::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tour>, DbErr> {
        let entity = entity::prelude::Tour::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tour::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Tour>, DbErr> {
        let entity = entity::prelude::Tour::find()
            .filter(entity::tour::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Tour::from_entity))
    }

    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let count = entity::prelude::Tour::find()
            .filter(entity::tour::Column::Slug.eq(slug))
            .apply_if(exclude_id, |query, id| {
                query.filter(entity::tour::Column::Id.ne(id))
            })
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists tours matching the filter, featured first then newest.
    pub async fn get_all(&self, filter: ProductFilter) -> Result<Vec<Tour>, DbErr> {
        let entities = entity::prelude::Tour::find()
            .apply_if(filter.destination_id, |query, id| {
                query.filter(entity::tour::Column::DestinationId.eq(id))
            })
            .apply_if(filter.featured, |query, featured| {
                query.filter(entity::tour::Column::Featured.eq(featured))
            })
            .apply_if(filter.active_only.then_some(true), |query, active| {
                query.filter(entity::tour::Column::Active.eq(active))
            })
            .order_by_desc(entity::tour::Column::Featured)
            .order_by_desc(entity::tour::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tour::from_entity).collect())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Tour>, u64), DbErr> {
        let paginator = entity::prelude::Tour::find()
            .order_by_desc(entity::tour::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Tour::from_entity).collect(), total))
    }

    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tour::update_many()
            .col_expr(
                entity::tour::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::tour::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Tour::find().count(self.db).await
    }
}
