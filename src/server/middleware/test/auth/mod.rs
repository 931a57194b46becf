use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    model::cart::CartOwner,
};
use test_utils::{builder::TestBuilder, factory};

mod cart_owner;
mod require;
