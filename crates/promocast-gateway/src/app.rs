use axum::{routing::get, Router};
use promocast_core::config::PromocastConfig;
use std::sync::Arc;

use crate::ws::broadcast::EventBroadcaster;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
///
/// The broadcaster (the set of connected clients) is the only shared
/// resource; everything else is immutable config injected at startup.
pub struct AppState {
    pub config: PromocastConfig,
    pub broadcaster: EventBroadcaster,
}

impl AppState {
    pub fn new(config: PromocastConfig) -> Self {
        Self {
            config,
            broadcaster: EventBroadcaster::new(),
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::http::pages::index_handler))
        .route("/health", get(crate::http::health::health_handler))
        .route("/ws", get(crate::ws::connection::ws_handler))
        .route("/test-sports", get(crate::http::promos::test_sports))
        .route(
            "/test-entertainment",
            get(crate::http::promos::test_entertainment),
        )
        .route("/test-primetime", get(crate::http::promos::test_primetime))
        .route("/reset-game", get(crate::http::promos::reset_game))
        .route("/promo-delay", get(crate::http::promos::promo_delay))
        .route(
            "/toast-user-dismiss",
            get(crate::http::pages::toast_user_dismiss),
        )
        .route(
            "/toast-auto-dismiss",
            get(crate::http::pages::toast_auto_dismiss),
        )
        .route(
            "/ribbon-user-dismiss",
            get(crate::http::pages::ribbon_user_dismiss),
        )
        .route(
            "/ribbon-auto-dismiss",
            get(crate::http::pages::ribbon_auto_dismiss),
        )
        .route("/remote", get(crate::http::pages::remote_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
