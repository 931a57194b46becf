//! Route table and API documentation.
//!
//! Routes are registered through `OpenApiRouter` so the OpenAPI document is assembled
//! from the handlers' `utoipa::path` annotations. The document is served at
//! `/api/openapi.json` with Swagger UI at `/api/docs`.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        admin::{self, catalog as admin_catalog, content as admin_content, geo as admin_geo},
        auth, booking, cart, catalog, content, geo, order,
    },
    error::{config::ConfigError, AppError},
    service::admin::upload::UPLOAD_URL_PREFIX,
    state::AppState,
};

/// Room for multipart framing on top of the largest accepted file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TripDesk API",
        description = "Travel booking backend: catalog, cart, checkout and back-office"
    ),
    tags(
        (name = auth::AUTH_TAG, description = "Registration and session login"),
        (name = catalog::CATALOG_TAG, description = "Public product catalog"),
        (name = geo::GEO_TAG, description = "Countries, cities and airports"),
        (name = content::CONTENT_TAG, description = "Menus and UI translations"),
        (name = cart::CART_TAG, description = "Session cart"),
        (name = order::ORDER_TAG, description = "Checkout and orders"),
        (name = booking::BOOKING_TAG, description = "Direct package bookings"),
        (name = admin_catalog::ADMIN_CATALOG_TAG, description = "Catalog management"),
        (name = admin_geo::ADMIN_GEO_TAG, description = "Geography management"),
        (name = admin_content::ADMIN_CONTENT_TAG, description = "Menus, translations and settings"),
        (name = admin::sales::ADMIN_SALES_TAG, description = "Dashboard, bookings and orders"),
        (name = admin::user::ADMIN_USER_TAG, description = "User management"),
        (name = admin::upload::ADMIN_UPLOAD_TAG, description = "Image uploads")
    )
)]
struct ApiDoc;

/// Builds the application router with documentation, static uploads and middleware.
///
/// # Returns
/// - `Ok(Router)` - Router ready for `with_state`
/// - `Err(ConfigError::InvalidEnvVar)` - `APP_URL` is not a valid CORS origin
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let (router, api) = api_router().split_for_parts();

    let origin = config
        .app_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: config.app_url.clone(),
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .nest_service(UPLOAD_URL_PREFIX, ServeDir::new(&config.upload_dir))
        .layer(DefaultBodyLimit::max(
            config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(public_routes())
        .merge(customer_routes())
        .merge(admin_routes())
}

fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(catalog::get_destinations))
        .routes(routes!(catalog::get_destination))
        .routes(routes!(catalog::get_packages))
        .routes(routes!(catalog::get_package))
        .routes(routes!(catalog::get_package_by_slug))
        .routes(routes!(catalog::get_tours))
        .routes(routes!(catalog::get_tour))
        .routes(routes!(catalog::get_hotels))
        .routes(routes!(catalog::get_hotel))
        .routes(routes!(catalog::get_hotel_rooms))
        .routes(routes!(catalog::get_room))
        .routes(routes!(catalog::get_visas))
        .routes(routes!(catalog::get_transport_types))
        .routes(routes!(geo::get_countries))
        .routes(routes!(geo::get_country_cities))
        .routes(routes!(geo::get_city_airports))
        .routes(routes!(content::get_menu))
        .routes(routes!(content::get_translations))
}

fn customer_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(cart::get_cart, cart::add_cart_item, cart::clear_cart))
        .routes(routes!(cart::update_cart_item, cart::remove_cart_item))
        .routes(routes!(order::checkout))
        .routes(routes!(order::get_orders))
        .routes(routes!(order::get_order))
        .routes(routes!(booking::create_booking, booking::get_bookings))
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            admin_catalog::get_destinations,
            admin_catalog::create_destination
        ))
        .routes(routes!(
            admin_catalog::get_destination,
            admin_catalog::update_destination,
            admin_catalog::delete_destination
        ))
        .routes(routes!(
            admin_catalog::get_packages,
            admin_catalog::create_package
        ))
        .routes(routes!(
            admin_catalog::get_package,
            admin_catalog::update_package,
            admin_catalog::delete_package
        ))
        .routes(routes!(admin_catalog::get_tours, admin_catalog::create_tour))
        .routes(routes!(
            admin_catalog::get_tour,
            admin_catalog::update_tour,
            admin_catalog::delete_tour
        ))
        .routes(routes!(admin_catalog::get_hotels, admin_catalog::create_hotel))
        .routes(routes!(
            admin_catalog::get_hotel,
            admin_catalog::update_hotel,
            admin_catalog::delete_hotel
        ))
        .routes(routes!(
            admin_catalog::get_hotel_rooms,
            admin_catalog::create_room
        ))
        .routes(routes!(admin_catalog::update_room, admin_catalog::delete_room))
        .routes(routes!(admin_catalog::get_visas, admin_catalog::create_visa))
        .routes(routes!(
            admin_catalog::get_visa,
            admin_catalog::update_visa,
            admin_catalog::delete_visa
        ))
        .routes(routes!(
            admin_catalog::get_transport_types,
            admin_catalog::create_transport_type
        ))
        .routes(routes!(
            admin_catalog::update_transport_type,
            admin_catalog::delete_transport_type
        ))
        .routes(routes!(admin_geo::get_countries, admin_geo::create_country))
        .routes(routes!(admin_geo::update_country, admin_geo::delete_country))
        .routes(routes!(admin_geo::get_cities, admin_geo::create_city))
        .routes(routes!(admin_geo::update_city, admin_geo::delete_city))
        .routes(routes!(admin_geo::get_airports, admin_geo::create_airport))
        .routes(routes!(admin_geo::update_airport, admin_geo::delete_airport))
        .routes(routes!(admin_content::get_menus, admin_content::create_menu))
        .routes(routes!(
            admin_content::get_menu,
            admin_content::update_menu,
            admin_content::delete_menu
        ))
        .routes(routes!(admin_content::create_menu_item))
        .routes(routes!(
            admin_content::update_menu_item,
            admin_content::delete_menu_item
        ))
        .routes(routes!(
            admin_content::get_translations,
            admin_content::create_translation
        ))
        .routes(routes!(
            admin_content::update_translation,
            admin_content::delete_translation
        ))
        .routes(routes!(admin_content::sync_translations))
        .routes(routes!(admin_content::machine_translate))
        .routes(routes!(
            admin_content::get_settings,
            admin_content::update_settings
        ))
        .routes(routes!(admin::user::get_users, admin::user::create_user))
        .routes(routes!(
            admin::user::get_user,
            admin::user::update_user,
            admin::user::delete_user
        ))
        .routes(routes!(admin::sales::get_dashboard))
        .routes(routes!(admin::sales::get_bookings))
        .routes(routes!(admin::sales::update_booking_status))
        .routes(routes!(admin::sales::get_orders))
        .routes(routes!(admin::sales::get_order))
        .routes(routes!(admin::sales::update_order_status))
        .routes(routes!(admin::upload::upload_image))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected: the generated document lists public and admin routes
    #[test]
    fn documents_routes() {
        let (_, api) = api_router().split_for_parts();

        for path in [
            "/api/register",
            "/api/packages/slug/{slug}",
            "/api/cart/{id}",
            "/api/orders/checkout",
            "/api/admin/translations/{id}/machine-translate",
            "/api/admin/upload",
        ] {
            assert!(api.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
