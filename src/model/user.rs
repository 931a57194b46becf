use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRoleDto {
    User,
    Admin,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRoleDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct RegisterDto {
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    #[validate(length(max = 120))]
    pub full_name: Option<String>,
    /// One-time setup code printed at startup while no admin exists.
    pub admin_code: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CreateUserDto {
    #[validate(length(min = 3, max = 50, message = "must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    #[validate(length(max = 120))]
    pub full_name: Option<String>,
    pub role: UserRoleDto,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct UpdateUserDto {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(max = 120))]
    pub full_name: Option<String>,
    pub role: UserRoleDto,
    /// New password, leaves the current one untouched when absent.
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: Option<String>,
}
