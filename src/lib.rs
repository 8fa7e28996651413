//! SolarZ client library
//!
//! Log in to the SolarZ solar monitoring platform and read plant status,
//! generation series, billing-unit balances, savings and notifications.
//!
//! ```no_run
//! use solarz::client::{AuthApi, PlantApi, SolarZClient};
//!
//! # async fn demo() -> solarz::Result<()> {
//! let client = SolarZClient::with_host(None)?;
//! client.authenticate("user@example.com", "secret").await?;
//! client.get_client_context().await?;
//! let report = client.get_last_report().await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{SolarZApi, SolarZClient};
pub use error::{ApiError, Error, ErrorCategory, Result};
