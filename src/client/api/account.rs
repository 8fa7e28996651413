//! Account API trait for savings and notifications

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Account-level operations for the SolarZ API
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Savings breakdown: per month, cumulative, and total return.
    async fn get_economized(&self) -> Result<Value>;

    /// One page of notifications, starting at page 0.
    async fn get_notifications(&self, page: u32) -> Result<Value>;

    /// Mark every notification as seen. Safe to repeat.
    async fn mark_all_notifications_seen(&self) -> Result<()>;
}
