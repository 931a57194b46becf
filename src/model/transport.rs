use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TransportTypeDto {
    pub id: i32,
    pub name: String,
    /// Percentage applied to package and tour prices, 100 keeps them unchanged.
    pub multiplier_percent: i32,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveTransportTypeDto {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub multiplier_percent: i32,
}
