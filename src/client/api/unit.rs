//! Billing unit (unidade) API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Billing-unit operations for the SolarZ API
#[async_trait]
pub trait UnitApi: Send + Sync {
    /// Total generation, total consumption and running credit per unit (kWh).
    async fn get_unidade_sums(&self) -> Result<Value>;

    /// Running credit per unit (kWh).
    async fn get_unidade_credit(&self) -> Result<Value>;

    /// Per-month generation, consumption and credit between two dates.
    async fn get_unidade_by_period(&self, start_date: &str, end_date: &str) -> Result<Value>;
}
