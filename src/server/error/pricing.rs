use thiserror::Error;

/// Reasons a cart line or booking cannot be priced.
///
/// Every variant maps to 400 Bad Request with the display message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PricingError {
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("At least one adult is required")]
    MissingAdults,

    #[error("Traveller counts must not be negative")]
    NegativeTravellers,

    #[error("Check-in and check-out dates are required")]
    MissingStayDates,

    #[error("Check-out must be at least one night after check-in")]
    InvalidStay,

    #[error("Transport multiplier must be positive")]
    InvalidMultiplier,

    #[error("Price is out of range")]
    Overflow,
}
