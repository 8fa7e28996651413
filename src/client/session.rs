//! Session state shared by every request of one client

use super::models::PlantRef;

/// Authentication token and plant selection of one login.
///
/// Lives behind the client's `RwLock`; nothing outside the client mutates it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    plant: Option<PlantRef>,
}

impl Session {
    /// Install a fresh token. The plant selection belongs to the previous
    /// login and is dropped.
    pub fn start(&mut self, token: String) {
        self.token = Some(token);
        self.plant = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn plant(&self) -> Option<&PlantRef> {
        self.plant.as_ref()
    }

    /// Store `plant` only if `token` is still the active one. A login that
    /// happened in the meantime owns the session and keeps it plant-less.
    pub fn set_plant_for(&mut self, token: &str, plant: PlantRef) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        self.plant = Some(plant);
        true
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }
}
