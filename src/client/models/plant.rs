//! Plant (usina) identification models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifiers of the plant the session works against.
///
/// The numeric `id` feeds the status and generation endpoints; the `uuid`
/// feeds the report endpoint. Both come from the first entry of `usinas` in
/// the client context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRef {
    /// Plant ID as sent in `id`/`usinaId` query parameters
    pub id: String,

    /// Plant UUID used in report paths (absent on some legacy accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// The vendor sends `id` as a JSON number; accept strings as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
struct RawPlant {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    uuid: Option<String>,
}

#[derive(Deserialize)]
struct ContextPlants {
    #[serde(default)]
    usinas: Vec<RawPlant>,
}

impl PlantRef {
    /// Pick the first plant listed in a `/cliente/context` payload.
    ///
    /// Returns `None` when the payload has no `usinas`, the list is empty, or
    /// the first entry has no `id`.
    pub fn first_in_context(context: &Value) -> Option<Self> {
        let plants = ContextPlants::deserialize(context).ok()?;
        let first = plants.usinas.into_iter().next()?;
        Some(Self {
            id: first.id?.into(),
            uuid: first.uuid.filter(|u| !u.is_empty()),
        })
    }
}
