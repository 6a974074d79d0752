//! Moderator test endpoints — force a promo type onto every connected
//! display immediately, bypassing the per-connection timer.

use axum::{extract::State, Json};
use promocast_core::promo::PromoType;
use promocast_protocol::frames::EventFrame;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::app::AppState;

/// GET /test-sports — broadcast a sports promo now.
pub async fn test_sports(State(state): State<Arc<AppState>>) -> Json<Value> {
    trigger(&state, PromoType::SportsPromo);
    Json(json!({ "message": "Sports promo triggered" }))
}

/// GET /test-entertainment — broadcast a primetime promo now.
pub async fn test_entertainment(State(state): State<Arc<AppState>>) -> Json<Value> {
    trigger(&state, PromoType::PrimetimePromo);
    Json(json!({ "message": "Entertainment promo triggered" }))
}

/// GET /test-primetime — alternative naming for the primetime trigger.
pub async fn test_primetime(State(state): State<Arc<AppState>>) -> Json<Value> {
    trigger(&state, PromoType::PrimetimePromo);
    Json(json!({ "message": "Primetime promo triggered" }))
}

/// GET /reset-game — broadcast the reset signal, no payload.
pub async fn reset_game(State(state): State<Arc<AppState>>) -> Json<Value> {
    info!(clients = state.broadcaster.client_count(), "reset to game");
    state.broadcaster.send_event(&EventFrame::reset_to_game());
    Json(json!({ "message": "Reset to game playing" }))
}

/// GET /promo-delay — report the configured trigger delay.
pub async fn promo_delay(State(state): State<Arc<AppState>>) -> Json<Value> {
    let delay = state.config.promo.delay;
    Json(json!({
        "currentDelay": delay,
        "message": format!("Promo appears after {delay} seconds"),
    }))
}

fn trigger(state: &AppState, promo_type: PromoType) {
    info!(%promo_type, clients = state.broadcaster.client_count(), "test promo triggered");
    state
        .broadcaster
        .send_event(&EventFrame::show_promo(promo_type));
}
