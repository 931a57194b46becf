//! Countries, cities and airports.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::geo::{airport::AirportRepository, city::CityRepository, country::CountryRepository},
    error::AppError,
    model::geo::{
        Airport, City, Country, SaveAirportParams, SaveCityParams, SaveCountryParams,
    },
};

pub struct GeoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_countries(&self) -> Result<Vec<Country>, AppError> {
        Ok(CountryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_country(&self, id: i32) -> Result<Option<Country>, AppError> {
        Ok(CountryRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create_country(&self, params: SaveCountryParams) -> Result<Country, AppError> {
        Ok(CountryRepository::new(self.db).create(params).await?)
    }

    pub async fn update_country(
        &self,
        id: i32,
        params: SaveCountryParams,
    ) -> Result<Option<Country>, AppError> {
        Ok(CountryRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete_country(&self, id: i32) -> Result<bool, AppError> {
        Ok(CountryRepository::new(self.db).delete(id).await?)
    }

    /// Lists cities, optionally limited to one country.
    ///
    /// Returns None when the country filter names a country that doesn't exist.
    pub async fn get_cities(&self, country_id: Option<i32>) -> Result<Option<Vec<City>>, AppError> {
        if let Some(country_id) = country_id {
            if self.get_country(country_id).await?.is_none() {
                return Ok(None);
            }
        }

        Ok(Some(CityRepository::new(self.db).get_all(country_id).await?))
    }

    pub async fn get_city(&self, id: i32) -> Result<Option<City>, AppError> {
        Ok(CityRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create_city(&self, params: SaveCityParams) -> Result<City, AppError> {
        self.ensure_country(params.country_id).await?;

        Ok(CityRepository::new(self.db).create(params).await?)
    }

    pub async fn update_city(
        &self,
        id: i32,
        params: SaveCityParams,
    ) -> Result<Option<City>, AppError> {
        self.ensure_country(params.country_id).await?;

        Ok(CityRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete_city(&self, id: i32) -> Result<bool, AppError> {
        Ok(CityRepository::new(self.db).delete(id).await?)
    }

    /// Lists airports, optionally limited to one city.
    ///
    /// Returns None when the city filter names a city that doesn't exist.
    pub async fn get_airports(&self, city_id: Option<i32>) -> Result<Option<Vec<Airport>>, AppError> {
        if let Some(city_id) = city_id {
            if self.get_city(city_id).await?.is_none() {
                return Ok(None);
            }
        }

        Ok(Some(AirportRepository::new(self.db).get_all(city_id).await?))
    }

    pub async fn create_airport(&self, params: SaveAirportParams) -> Result<Airport, AppError> {
        self.ensure_city(params.city_id).await?;

        Ok(AirportRepository::new(self.db).create(params).await?)
    }

    pub async fn update_airport(
        &self,
        id: i32,
        params: SaveAirportParams,
    ) -> Result<Option<Airport>, AppError> {
        self.ensure_city(params.city_id).await?;

        Ok(AirportRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete_airport(&self, id: i32) -> Result<bool, AppError> {
        Ok(AirportRepository::new(self.db).delete(id).await?)
    }

    async fn ensure_country(&self, country_id: i32) -> Result<(), AppError> {
        match self.get_country(country_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Country {} does not exist",
                country_id
            ))),
        }
    }

    async fn ensure_city(&self, city_id: i32) -> Result<(), AppError> {
        match self.get_city(city_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!("City {} does not exist", city_id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests listing cities of a country.
    ///
    /// Expected: Some with the country's cities, None for an unknown country
    #[tokio::test]
    async fn lists_cities_by_country() -> Result<(), AppError> {
        let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let country = factory::create_country(db).await?;
        let other = factory::create_country(db).await?;
        factory::country::create_city(db, country.id).await?;
        factory::country::create_city(db, other.id).await?;

        let service = GeoService::new(db);

        let cities = service.get_cities(Some(country.id)).await?.unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].country_id, country.id);
        assert!(service.get_cities(Some(9999)).await?.is_none());

        Ok(())
    }

    /// Tests that a city cannot reference a missing country.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn city_requires_country() -> Result<(), AppError> {
        let test = TestBuilder::new().with_geo_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = GeoService::new(db)
            .create_city(SaveCityParams {
                country_id: 77,
                name: "Nowhere".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
