use serde::Deserialize;
use serde_json::Value;

/// Wire envelope published by upstream systems. `data` carries the same
/// fields as the HTTP request bodies.
#[derive(Debug, Deserialize)]
pub struct RoleEventEnvelope {
    #[serde(rename = "eventType")]
    pub event_type: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RoleEventEnvelope {
    /// `data` that is absent, JSON null, or an empty object counts as missing.
    pub fn payload(&self) -> Option<&Value> {
        match &self.data {
            Some(Value::Null) | None => None,
            Some(Value::Object(map)) if map.is_empty() => None,
            Some(value) => Some(value),
        }
    }
}

/// The closed set of supported role events. Unknown event types are not an
/// error; the consumer logs and drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleEventKind {
    Created,
    Updated,
    Deleted,
}

impl RoleEventKind {
    pub fn parse(event_type: &str) -> Option<Self> {
        match event_type {
            "RolCreado" => Some(RoleEventKind::Created),
            "RolActualizado" => Some(RoleEventKind::Updated),
            "RolEliminado" => Some(RoleEventKind::Deleted),
            _ => None,
        }
    }
}
