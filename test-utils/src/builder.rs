use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Booking};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Booking)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the geography tables: Country, City, Airport.
    pub fn with_geo_tables(self) -> Self {
        self.with_table(Country)
            .with_table(City)
            .with_table(Airport)
    }

    /// Adds every table a catalog product depends on.
    ///
    /// Includes the geography tables followed by Destination, TransportType, Hotel, Room,
    /// Package, PackageHotel, Tour and Visa.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_geo_tables()
            .with_table(Destination)
            .with_table(TransportType)
            .with_table(Hotel)
            .with_table(Room)
            .with_table(Package)
            .with_table(PackageHotel)
            .with_table(Tour)
            .with_table(Visa)
    }

    /// Adds the catalog tables plus User, CartItem, Order, OrderItem and Booking.
    ///
    /// Use this when testing cart, checkout or booking functionality.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_commerce_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_commerce_tables(self) -> Self {
        self.with_table(User)
            .with_catalog_tables()
            .with_table(CartItem)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(Booking)
    }

    /// Adds the content tables: Translation, Menu, MenuItem, Setting.
    pub fn with_content_tables(self) -> Self {
        self.with_table(Translation)
            .with_table(Menu)
            .with_table(MenuItem)
            .with_table(Setting)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
