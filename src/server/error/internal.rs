use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A row that was just written could not be read back.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Entity name for logging
        entity: &'static str,
        /// Primary key of the missing row
        id: i32,
    },

    /// Translation key scanning task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
