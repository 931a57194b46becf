//! Visa data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::visa::{SaveVisaParams, Visa};

pub struct VisaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveVisaParams) -> Result<Visa, DbErr> {
        let entity = entity::visa::ActiveModel {
            country_id: ActiveValue::Set(params.country_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            processing_days: ActiveValue::Set(params.processing_days),
            price: ActiveValue::Set(params.price),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Visa::from_entity(entity))
    }

    pub async fn update(&self, id: i32, params: SaveVisaParams) -> Result<Option<Visa>, DbErr> {
        let Some(existing) = entity::prelude::Visa::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::visa::ActiveModel = existing.into();
        active.country_id = ActiveValue::Set(params.country_id);
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.processing_days = ActiveValue::Set(params.processing_days);
        active.price = ActiveValue::Set(params.price);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Visa::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Visa>, DbErr> {
        let entity = entity::prelude::Visa::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Visa::from_entity))
    }

    /// Lists visas, optionally for one country, ordered by title.
    pub async fn get_all(
        &self,
        country_id: Option<i32>,
        active_only: bool,
    ) -> Result<Vec<Visa>, DbErr> {
        let entities = entity::prelude::Visa::find()
            .apply_if(country_id, |query, id| {
                query.filter(entity::visa::Column::CountryId.eq(id))
            })
            .apply_if(active_only.then_some(true), |query, active| {
                query.filter(entity::visa::Column::Active.eq(active))
            })
            .order_by_asc(entity::visa::Column::Title)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Visa::from_entity).collect())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Visa>, u64), DbErr> {
        let paginator = entity::prelude::Visa::find()
            .order_by_desc(entity::visa::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Visa::from_entity).collect(), total))
    }

    pub async fn deactivate(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Visa::update_many()
            .col_expr(
                entity::visa::Column::Active,
                sea_orm::sea_query::Expr::value(false),
            )
            .filter(entity::visa::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Visa::find().count(self.db).await
    }
}
