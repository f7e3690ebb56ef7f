use serde::Deserialize;
use serde_json::Value;

/// Body of a `POST` request: `{"type": "plant" | "lawn", "data": {...}}`.
///
/// `data` stays untyped until `kind` has been matched, so an unknown kind can be
/// told apart from a malformed record.
#[derive(Deserialize, Debug, Default)]
pub struct NewRecord {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub data: Option<Value>,
}
