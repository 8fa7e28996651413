//! SolarZ API client

pub mod api;
pub mod models;
pub mod session;
pub mod solarz;

pub use api::{AccountApi, AuthApi, DEFAULT_UNITE_PORTALS_DAY, PlantApi, UnitApi};
pub use models::{DateRange, Period, PlantRef};
pub use solarz::{API_BASE_URL, ClientOptions, DEFAULT_TIMEOUT, SolarZClient};

/// The complete SolarZ API surface.
///
/// Implemented automatically for anything that implements all four
/// sub-traits.
pub trait SolarZApi: AuthApi + PlantApi + UnitApi + AccountApi {}

impl<T: AuthApi + PlantApi + UnitApi + AccountApi> SolarZApi for T {}
