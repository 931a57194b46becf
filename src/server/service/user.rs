use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{PageParams, Paginated},
        user::{CreateUserParams, NewUser, UpdateUserParams, User},
    },
    service::auth::{ensure_unique, hash_password},
};

/// Admin management of user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(users, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates an account with an explicit role, under the same uniqueness rules as
    /// self-registration.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        ensure_unique(self.db, &params.username, &params.email, None).await?;

        let password_hash = hash_password(params.password).await?;

        let user = UserRepository::new(self.db)
            .create(NewUser {
                username: params.username,
                email: params.email,
                password_hash,
                full_name: params.full_name,
                role: params.role,
            })
            .await?;

        Ok(user)
    }

    /// Updates profile fields and role, re-hashing the password when one is supplied.
    ///
    /// Returns None if the user doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if repo.email_exists(&params.email, Some(existing.id)).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = match params.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let user = repo
            .update(id, params.email, params.full_name, params.role, password_hash)
            .await?;

        Ok(user)
    }

    /// Deletes a user account.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Admin tried to delete their own account
    pub async fn delete(&self, id: i32, acting_user_id: i32) -> Result<bool, AppError> {
        if id == acting_user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        Ok(UserRepository::new(self.db).delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::UserRole;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that an admin cannot delete their own account.
    ///
    /// Expected: Err(AppError::BadRequest) and the user still exists
    #[tokio::test]
    async fn rejects_deleting_self() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let admin = factory::user::create_admin(db).await?;

        let service = UserService::new(db);
        let result = service.delete(admin.id, admin.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(service.get_by_id(admin.id).await?.is_some());

        Ok(())
    }

    /// Tests updating another user's role and password.
    ///
    /// Expected: role changed and the new password hash is an Argon2 string
    #[tokio::test]
    async fn updates_role_and_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;

        let updated = UserService::new(db)
            .update(
                user.id,
                UpdateUserParams {
                    email: user.email.clone(),
                    full_name: Some("Promoted".to_string()),
                    role: UserRole::Admin,
                    password: Some("new-password".to_string()),
                },
            )
            .await?
            .unwrap();

        assert_eq!(updated.role, UserRole::Admin);
        assert_eq!(updated.full_name.as_deref(), Some("Promoted"));
        assert!(updated.password_hash.starts_with("$argon2id$"));

        Ok(())
    }

    /// Tests that updating to another user's email conflicts.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn rejects_taken_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let first = factory::user::create_user(db).await?;
        let second = factory::user::create_user(db).await?;

        let result = UserService::new(db)
            .update(
                second.id,
                UpdateUserParams {
                    email: first.email,
                    full_name: None,
                    role: UserRole::User,
                    password: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }
}
