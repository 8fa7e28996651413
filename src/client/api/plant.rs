//! Plant API trait for status, reports and generation series

use async_trait::async_trait;
use serde_json::Value;

use crate::client::models::Period;
use crate::error::Result;

/// Plant-level operations for the SolarZ API
///
/// Everything except [`get_client_context`](PlantApi::get_client_context)
/// works on the plant captured by that call and fails with
/// `ApiError::PlantNotLoaded` until it has been made.
#[async_trait]
pub trait PlantApi: Send + Sync {
    /// Fetch account context (plants, active tariff flag) and capture the
    /// first plant for later calls.
    async fn get_client_context(&self) -> Result<Value>;

    /// Current status snapshot of the plant.
    async fn get_last_status(&self) -> Result<Value>;

    /// Most recent report of the plant.
    async fn get_last_report(&self) -> Result<Value>;

    /// Generation series for one day (`YYYY-MM-DD`).
    ///
    /// Callers without a preference pass
    /// [`DEFAULT_UNITE_PORTALS_DAY`](super::DEFAULT_UNITE_PORTALS_DAY).
    async fn get_generation_day(&self, date: &str, unite_portals: bool) -> Result<Value>;

    /// Generation series between two dates, bucketed by `period`.
    async fn get_generation_period(
        &self,
        start_date: &str,
        end_date: &str,
        period: Period,
        unite_months: bool,
        unite_portals: bool,
    ) -> Result<Value>;
}
