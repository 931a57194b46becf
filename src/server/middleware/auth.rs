use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CartSession},
    model::{cart::CartOwner, user::User},
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.current_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to access an admin endpoint without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Gets the logged-in user without requiring one.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user is logged in
    /// - `Ok(None)` - Anonymous visitor
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(Some(user))
    }

    /// Resolves who owns the cart for this request.
    ///
    /// Logged-in users own their cart directly; everyone else gets a guest token, created
    /// on demand when `create_guest` is set.
    ///
    /// # Returns
    /// - `Ok(Some(CartOwner))` - Owner resolved
    /// - `Ok(None)` - Anonymous visitor without a guest token and `create_guest` unset
    pub async fn cart_owner(&self, create_guest: bool) -> Result<Option<CartOwner>, AppError> {
        if let Some(user) = self.current_user().await? {
            return Ok(Some(CartOwner::User(user.id)));
        }

        let cart_session = CartSession::new(self.session);
        let token = if create_guest {
            Some(cart_session.get_or_create_guest_token().await?)
        } else {
            cart_session.guest_token().await?
        };

        Ok(token.map(CartOwner::Guest))
    }
}
