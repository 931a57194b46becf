pub use super::airport::Entity as Airport;
pub use super::booking::Entity as Booking;
pub use super::cart_item::Entity as CartItem;
pub use super::city::Entity as City;
pub use super::country::Entity as Country;
pub use super::destination::Entity as Destination;
pub use super::hotel::Entity as Hotel;
pub use super::menu::Entity as Menu;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::package::Entity as Package;
pub use super::package_hotel::Entity as PackageHotel;
pub use super::room::Entity as Room;
pub use super::setting::Entity as Setting;
pub use super::tour::Entity as Tour;
pub use super::translation::Entity as Translation;
pub use super::transport_type::Entity as TransportType;
pub use super::user::Entity as User;
pub use super::visa::Entity as Visa;
