//! One-time admin setup codes.
//!
//! When the server starts without any admin account it generates a code, logs a
//! registration link containing it, and the first registration presenting the code gets
//! the admin role. Codes live only in memory, expire after a short TTL and can be used
//! once.

use rand::{distr::Alphanumeric, Rng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a generated code.
pub const ADMIN_CODE_TTL: Duration = Duration::from_secs(60);

const ADMIN_CODE_LENGTH: usize = 32;

#[derive(Clone)]
struct IssuedCode {
    value: String,
    expires_at: Instant,
}

impl IssuedCode {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Holds at most one active admin setup code shared across request handlers.
///
/// Cloning is cheap; all clones see the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    ttl: Duration,
    current: Arc<RwLock<Option<IssuedCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(ADMIN_CODE_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Issues a fresh 32-character alphanumeric code, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The code to include in the setup link
    pub async fn generate(&self) -> String {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ADMIN_CODE_LENGTH)
            .map(char::from)
            .collect();

        *self.current.write().await = Some(IssuedCode {
            value: value.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        value
    }

    /// Checks a code presented at registration and consumes it on success.
    ///
    /// Expired codes are dropped on access. A wrong guess leaves the active code in place.
    ///
    /// # Returns
    /// - `true` - Code matched an unexpired code, which is now consumed
    /// - `false` - No code, wrong code or expired code
    pub async fn validate_and_consume(&self, input: &str) -> bool {
        let mut current = self.current.write().await;

        match current.as_ref() {
            Some(code) if code.is_expired() => {
                *current = None;
                false
            }
            Some(code) if code.value == input => {
                *current = None;
                true
            }
            _ => false,
        }
    }

    /// Reinstates a consumed code whose registration failed, with a fresh TTL.
    ///
    /// Does nothing if another code has been issued in the meantime.
    pub async fn restore(&self, value: String) {
        let mut current = self.current.write().await;

        if current.as_ref().is_some_and(|code| !code.is_expired()) {
            return;
        }

        *current = Some(IssuedCode {
            value,
            expires_at: Instant::now() + self.ttl,
        });
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(|code| !code.is_expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    /// Tests generating a new admin code.
    ///
    /// Expected: 32 alphanumeric characters and an active code
    #[tokio::test]
    async fn generates_alphanumeric_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;

        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests that a correct code works exactly once.
    ///
    /// Expected: first validation succeeds, second fails
    #[tokio::test]
    async fn code_is_single_use() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests that a wrong guess does not burn the active code.
    ///
    /// Expected: wrong code rejected, real code still accepted
    #[tokio::test]
    async fn wrong_code_keeps_active_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.validate_and_consume(&code).await);
    }

    /// Tests validating when no code was generated.
    ///
    /// Expected: false
    #[tokio::test]
    async fn rejects_when_no_code_exists() {
        let service = AdminCodeService::new();

        assert!(!service.validate_and_consume("any_code").await);
    }

    /// Tests that codes stop working after their TTL.
    ///
    /// Expected: expired code rejected
    #[tokio::test]
    async fn expired_code_is_rejected() {
        let service = AdminCodeService::with_ttl(Duration::from_millis(20));
        let code = service.generate().await;

        sleep(Duration::from_millis(50)).await;

        assert!(!service.has_valid_code().await);
        assert!(!service.validate_and_consume(&code).await);
    }

    /// Tests that generating again replaces the previous code.
    ///
    /// Expected: only the newest code validates
    #[tokio::test]
    async fn regenerating_replaces_code() {
        let service = AdminCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert_ne!(first, second);
        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }

    /// Tests restoring a consumed code.
    ///
    /// Expected: the restored code validates again, a newer code is never replaced
    #[tokio::test]
    async fn restores_consumed_code() {
        let service = AdminCodeService::new();
        let code = service.generate().await;
        assert!(service.validate_and_consume(&code).await);

        service.restore(code.clone()).await;
        assert!(service.validate_and_consume(&code).await);

        let newer = service.generate().await;
        service.restore(code.clone()).await;
        assert!(!service.validate_and_consume(&code).await);
        assert!(service.validate_and_consume(&newer).await);
    }
}
