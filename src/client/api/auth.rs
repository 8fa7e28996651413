//! Authentication API trait

use async_trait::async_trait;

use crate::error::Result;

/// Authentication operations for the SolarZ API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in with account credentials and store the session token.
    ///
    /// On failure the previous session, if any, stays in place.
    async fn authenticate(&self, username: &str, password: &str) -> Result<()>;
}
