//! API trait definitions split by responsibility
//!
//! This module organizes the SolarZ API surface into focused sub-traits:
//! - [`AuthApi`] - Login
//! - [`PlantApi`] - Client context, plant status, reports and generation
//! - [`UnitApi`] - Billing unit sums, credit and monthly breakdown
//! - [`AccountApi`] - Savings and notifications
//!
//! The [`SolarZApi`](super::SolarZApi) super-trait combines all four.

mod account;
mod auth;
mod plant;
mod unit;

pub use account::AccountApi;
pub use auth::AuthApi;
pub use plant::PlantApi;
pub use unit::UnitApi;

/// Default `unitePortals` for day queries
pub const DEFAULT_UNITE_PORTALS_DAY: bool = true;
