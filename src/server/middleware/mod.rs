//! Request-scoped helpers used by controllers: typed session access and the auth guard.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
