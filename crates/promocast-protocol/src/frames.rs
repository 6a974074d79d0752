use promocast_core::promo::PromoType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events;

/// Server → Client push event.
/// Wire: `{ "event": "show-promo", "payload": { "promoType": "sports_promo" } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFrame {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl EventFrame {
    pub fn new(event: impl Into<String>, payload: impl Serialize) -> Self {
        Self {
            event: event.into(),
            payload: Some(serde_json::to_value(payload).unwrap_or(Value::Null)),
        }
    }

    /// An event with no payload field at all (e.g. `reset-to-game`).
    pub fn bare(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            payload: None,
        }
    }

    pub fn show_promo(promo_type: PromoType) -> Self {
        Self::new(
            events::SHOW_PROMO,
            serde_json::json!({ "promoType": promo_type }),
        )
    }

    pub fn reset_to_game() -> Self {
        Self::bare(events::RESET_TO_GAME)
    }

    /// Relay payload from a `remote-input` frame, forwarded unchanged.
    pub fn tv_command(payload: Option<Value>) -> Self {
        Self {
            event: events::TV_COMMAND.to_string(),
            payload,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Client → Server frame. The payload is opaque — the relay path forwards
/// it without validation.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundFrame {
    pub event: String,
    #[serde(default)]
    pub payload: Option<Value>,
}
