//! Account registration, login and password hashing.
//!
//! Passwords are hashed with Argon2id and stored as PHC strings. Hashing runs on the
//! blocking thread pool since it is deliberately slow.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{NewUser, RegisterParams, User},
    service::admin::code::AdminCodeService,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_code_service: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_code_service: &'a AdminCodeService) -> Self {
        Self {
            db,
            admin_code_service,
        }
    }

    /// Creates a new account.
    ///
    /// A valid admin setup code grants the admin role and is consumed; an invalid one
    /// rejects the registration instead of silently creating a regular user. The code is
    /// restored when the account row cannot be inserted.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::Conflict)` - Username or email already registered
    /// - `Err(AuthError::InvalidAdminCode)` - Admin code wrong or expired
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        ensure_unique(self.db, &params.username, &params.email, None).await?;

        let password_hash = hash_password(params.password).await?;

        let admin_code = params.admin_code;
        let role = match admin_code.as_deref() {
            Some(code) => {
                if !self.admin_code_service.validate_and_consume(code).await {
                    return Err(AuthError::InvalidAdminCode.into());
                }
                UserRole::Admin
            }
            None => UserRole::User,
        };

        let created = UserRepository::new(self.db)
            .create(NewUser {
                username: params.username,
                email: params.email,
                password_hash,
                full_name: params.full_name,
                role,
            })
            .await;

        match (created, admin_code) {
            (Ok(user), Some(_)) => {
                tracing::info!("Admin code accepted for new user {}", user.username);
                Ok(user)
            }
            (Ok(user), None) => Ok(user),
            (Err(e), Some(code)) => {
                self.admin_code_service.restore(code).await;
                tracing::warn!("Admin registration failed, setup code restored: {}", e);
                Err(e.into())
            }
            (Err(e), None) => Err(e.into()),
        }
    }

    /// Checks a username and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    pub async fn login(&self, username: &str, password: String) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Rejects a username or email already used by another account.
pub(crate) async fn ensure_unique(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.username_exists(username, exclude_id).await? {
        return Err(AppError::Conflict("Username is already taken".to_string()));
    }
    if repo.email_exists(email, exclude_id).await? {
        return Err(AppError::Conflict("Email is already registered".to_string()));
    }

    Ok(())
}

/// Hashes a password into an Argon2id PHC string.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| InternalError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(InternalError::from)??;

    Ok(hash)
}

/// Verifies a password against a stored PHC string.
///
/// A stored value that is not a valid hash never matches.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&password_hash) else {
            tracing::warn!("Stored password hash could not be parsed");
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(InternalError::from)?;

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::auth::AuthError;
    use test_utils::{builder::TestBuilder, factory};

    fn register_params(username: &str, admin_code: Option<String>) -> RegisterParams {
        RegisterParams {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "secret-pass".to_string(),
            full_name: None,
            admin_code,
        }
    }

    /// Tests hashing and verifying a password.
    ///
    /// Expected: the right password matches and a wrong one does not
    #[tokio::test]
    async fn hashes_and_verifies_password() -> Result<(), AppError> {
        let hash = hash_password("correct horse".to_string()).await?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse".to_string(), hash.clone()).await?);
        assert!(!verify_password("battery staple".to_string(), hash).await?);
        assert!(!verify_password("x".to_string(), "unusable".to_string()).await?);

        Ok(())
    }

    /// Tests registering and logging in.
    ///
    /// Expected: regular role and login with the registered password succeeds
    #[tokio::test]
    async fn registers_and_logs_in() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let codes = AdminCodeService::new();

        let service = AuthService::new(db, &codes);
        let user = service.register(register_params("sara", None)).await?;

        assert_eq!(user.role, UserRole::User);

        let logged_in = service.login("sara", "secret-pass".to_string()).await?;
        assert_eq!(logged_in.id, user.id);

        let wrong = service.login("sara", "nope".to_string()).await;
        assert!(matches!(
            wrong,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Tests the duplicate username and email checks.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn rejects_duplicate_username() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let codes = AdminCodeService::new();

        factory::user::UserFactory::new(db)
            .username("sara")
            .build()
            .await?;

        let result = AuthService::new(db, &codes)
            .register(register_params("sara", None))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests that a valid admin code grants the admin role.
    ///
    /// Expected: admin role and the code is consumed
    #[tokio::test]
    async fn admin_code_grants_admin_role() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let codes = AdminCodeService::new();
        let code = codes.generate().await;

        let service = AuthService::new(db, &codes);
        let admin = service
            .register(register_params("boss", Some(code.clone())))
            .await?;
        let reused = service.register(register_params("other", Some(code))).await;

        assert!(admin.is_admin());
        assert!(matches!(
            reused,
            Err(AppError::AuthErr(AuthError::InvalidAdminCode))
        ));

        Ok(())
    }

    /// Tests an admin registration whose insert fails after the code was accepted.
    ///
    /// Expected: Err(AppError::DbErr) and the setup code still valid
    #[tokio::test]
    async fn failed_insert_restores_admin_code() -> Result<(), AppError> {
        use sea_orm::ConnectionTrait;

        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        db.execute_unprepared(
            r#"CREATE TRIGGER reject_user_insert BEFORE INSERT ON "user"
               BEGIN SELECT RAISE(ABORT, 'insert rejected'); END;"#,
        )
        .await?;
        let codes = AdminCodeService::new();
        let code = codes.generate().await;

        let result = AuthService::new(db, &codes)
            .register(register_params("boss", Some(code.clone())))
            .await;

        assert!(matches!(result, Err(AppError::DbErr(_))));
        assert!(codes.validate_and_consume(&code).await);

        Ok(())
    }
}
