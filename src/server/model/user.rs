//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{CreateUserDto, RegisterDto, UpdateUserDto, UserDto, UserRoleDto};

/// Account with its stored credential hash.
///
/// The hash never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            full_name: entity.full_name,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => UserRoleDto::User,
            UserRole::Admin => UserRoleDto::Admin,
        }
    }
}

impl From<UserRoleDto> for UserRole {
    fn from(role: UserRoleDto) -> Self {
        match role {
            UserRoleDto::User => UserRole::User,
            UserRoleDto::Admin => UserRole::Admin,
        }
    }
}

/// Plain-text registration data before hashing.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub admin_code: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            full_name: dto.full_name,
            admin_code: dto.admin_code.filter(|code| !code.is_empty()),
        }
    }
}

/// Admin-driven account creation.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            full_name: dto.full_name,
            role: dto.role.into(),
        }
    }
}

/// Row values for inserting a user once the password is hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    /// Replacement password in plain text, hashed by the service.
    pub password: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            full_name: dto.full_name,
            role: dto.role.into(),
            password: dto.password,
        }
    }
}
