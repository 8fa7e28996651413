//! SolarZ API data models
//!
//! Response payloads are vendor JSON passed through as `serde_json::Value`.
//! The types here cover what the client itself has to build or inspect:
//! login payloads, the plant reference, and query parameters.

mod auth;
mod plant;
mod query;

pub use auth::{LoginRequest, LoginResponse};
pub use plant::PlantRef;
pub(crate) use query::flag;
pub use query::{DATE_FORMAT, DateRange, Period, parse_date};
