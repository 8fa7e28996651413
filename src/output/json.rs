//! `--format json` envelope around vendor payloads

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct Envelope<'a> {
    data: &'a Value,
    meta: Meta,
}

/// When and by which CLI version the payload was fetched.
#[derive(Serialize)]
struct Meta {
    timestamp: String,
    version: &'static str,
}

/// Wrap a payload as `{"data": ..., "meta": {"timestamp", "version"}}`.
pub fn format_json(data: &Value) -> serde_json::Result<String> {
    let envelope = Envelope {
        data,
        meta: Meta {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
        },
    };
    serde_json::to_string_pretty(&envelope)
}
