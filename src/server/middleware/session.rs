//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - User authentication state (user ID)
//! - `CartSession` - Anonymous cart token for visitors who are not logged in
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use rand::{distr::Alphanumeric, Rng};
use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_CART_GUEST_TOKEN: &str = "cart:guest_token";

const GUEST_TOKEN_LENGTH: usize = 32;

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's ID and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// Called after successful login or registration to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Issues a new session ID while keeping the session data.
    ///
    /// Called on login so an ID observed before authentication cannot be reused.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove authentication state and the guest cart token.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Guest cart session management.
///
/// Visitors who are not logged in get a random token that owns their cart lines. The token
/// is created on the first add and removed once the cart is merged into a user account.
pub struct CartSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CartSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the guest token if one was issued.
    pub async fn guest_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_CART_GUEST_TOKEN).await?)
    }

    /// Gets the guest token, issuing and storing a new one when missing.
    ///
    /// # Returns
    /// - `Ok(token)` - Existing or newly created token
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_or_create_guest_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.guest_token().await? {
            return Ok(token);
        }

        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(GUEST_TOKEN_LENGTH)
            .map(char::from)
            .collect();
        self.session
            .insert(SESSION_CART_GUEST_TOKEN, token.clone())
            .await?;

        Ok(token)
    }

    /// Retrieves and removes the guest token.
    ///
    /// Used on login once the guest cart has been moved to the user.
    pub async fn take_guest_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(SESSION_CART_GUEST_TOKEN).await?)
    }
}
