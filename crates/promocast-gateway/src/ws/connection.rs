use axum::{
    extract::{ws::Message, ws::WebSocket, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use promocast_core::config::MAX_PAYLOAD_BYTES;
use promocast_protocol::frames::EventFrame;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::app::AppState;
use crate::ws::message;

/// Axum handler — upgrades HTTP to WebSocket at GET /ws.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| run_connection(socket, state))
}

/// One-shot promo timer: sleep for the configured delay, then broadcast a
/// contextual promo to every connected client.
///
/// The task is detached from the connection that scheduled it — it fires
/// even if that connection has since closed, and N connections schedule N
/// independent timers.
pub fn schedule_promo_timer(state: Arc<AppState>, delay: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let promo_type = promocast_core::promo::contextual_promo_type(chrono::Local::now());
        info!(%promo_type, "promo timer fired, broadcasting");
        state.broadcaster.send_event(&EventFrame::show_promo(promo_type));
    })
}

/// Per-connection event loop — lives for the entire WS session.
async fn run_connection(socket: WebSocket, state: Arc<AppState>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    info!(conn_id = %conn_id, "new WS connection");

    let (mut tx, mut rx) = socket.split();

    // subscribe before scheduling so this client sees its own promo
    let mut broadcast_rx = state.broadcaster.subscribe();
    schedule_promo_timer(
        Arc::clone(&state),
        Duration::from_secs(state.config.promo.delay),
    );

    loop {
        tokio::select! {
            msg = rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if text.len() > MAX_PAYLOAD_BYTES {
                            warn!(conn_id, size = text.len(), "payload too large, dropping frame");
                            continue;
                        }
                        message::handle(&conn_id, &text, &state);
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = tx.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        warn!(conn_id, error = %e, "WS receive error");
                        break;
                    }
                    _ => {}
                }
            }

            event = broadcast_rx.recv() => {
                match event {
                    Ok(payload) => {
                        if tx.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    // best-effort delivery: skip missed events rather than close
                    Err(RecvError::Lagged(n)) => {
                        warn!(conn_id, missed = n, "slow consumer, events skipped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    info!(conn_id, "WS connection closed");
}
