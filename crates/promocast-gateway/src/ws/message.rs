use promocast_protocol::{events, frames::EventFrame, frames::InboundFrame};
use tracing::{debug, warn};

use crate::app::AppState;

/// Process one inbound WS text frame.
///
/// The only inbound event is `remote-input`, re-broadcast verbatim to all
/// clients (sender included) as `tv-command`. Anything else is logged and
/// dropped — the relay path has no error replies.
pub fn handle(conn_id: &str, text: &str, state: &AppState) {
    let frame: InboundFrame = match serde_json::from_str(text) {
        Ok(f) => f,
        Err(e) => {
            warn!(conn_id, error = %e, "malformed frame, ignoring");
            return;
        }
    };

    match frame.event.as_str() {
        events::REMOTE_INPUT => {
            debug!(conn_id, "relaying remote input");
            state
                .broadcaster
                .send_event(&EventFrame::tv_command(frame.payload));
        }
        other => {
            debug!(conn_id, event = other, "unknown inbound event, ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promocast_core::config::PromocastConfig;
    use serde_json::Value;

    fn test_state() -> AppState {
        AppState::new(PromocastConfig::default())
    }

    #[tokio::test]
    async fn remote_input_is_relayed_to_all_clients_unchanged() {
        let state = test_state();
        let mut a = state.broadcaster.subscribe();
        let mut b = state.broadcaster.subscribe();

        handle("conn-a", r#"{"event":"remote-input","payload":{"x":1}}"#, &state);

        for rx in [&mut a, &mut b] {
            let frame: Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
            assert_eq!(frame["event"], "tv-command");
            assert_eq!(frame["payload"], serde_json::json!({"x": 1}));
        }
    }

    #[tokio::test]
    async fn relay_happens_exactly_once_per_input() {
        let state = test_state();
        let mut rx = state.broadcaster.subscribe();

        handle("conn-a", r#"{"event":"remote-input","payload":"up"}"#, &state);

        rx.recv().await.unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn remote_input_without_payload_is_still_relayed() {
        let state = test_state();
        let mut rx = state.broadcaster.subscribe();

        handle("conn-a", r#"{"event":"remote-input"}"#, &state);

        assert_eq!(rx.recv().await.unwrap(), r#"{"event":"tv-command"}"#);
    }

    #[tokio::test]
    async fn malformed_json_is_dropped_without_broadcast() {
        let state = test_state();
        let mut rx = state.broadcaster.subscribe();

        handle("conn-a", "{not json", &state);

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unknown_events_are_not_relayed() {
        let state = test_state();
        let mut rx = state.broadcaster.subscribe();

        handle("conn-a", r#"{"event":"show-promo","payload":{}}"#, &state);

        assert!(rx.try_recv().is_err());
    }
}
