use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::util::ServiceExt; // not axum::ServiceExt

use promocast_core::config::PromocastConfig;
use promocast_gateway::app::{build_router, AppState};

fn test_state(delay: u64) -> Arc<AppState> {
    let mut config = PromocastConfig::default();
    config.promo.delay = delay;
    Arc::new(AppState::new(config))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_returns_ok() {
    let app = build_router(test_state(10));
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn promo_delay_reflects_configured_value() {
    let app = build_router(test_state(3));
    let (status, body) = get(app, "/promo-delay").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentDelay"], 3);
    assert_eq!(body["message"], "Promo appears after 3 seconds");
}

#[tokio::test]
async fn test_sports_broadcasts_immediately() {
    let state = test_state(10);
    let mut rx = state.broadcaster.subscribe();

    let (status, body) = get(build_router(Arc::clone(&state)), "/test-sports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Sports promo triggered");

    let frame: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
    assert_eq!(frame["event"], "show-promo");
    assert_eq!(frame["payload"]["promoType"], "sports_promo");
}

#[tokio::test]
async fn test_entertainment_broadcasts_primetime() {
    let state = test_state(10);
    let mut rx = state.broadcaster.subscribe();

    let (status, body) = get(build_router(Arc::clone(&state)), "/test-entertainment").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Entertainment promo triggered");

    let frame: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
    assert_eq!(frame["payload"]["promoType"], "primetime_promo");
}

#[tokio::test]
async fn test_primetime_broadcasts_primetime() {
    let state = test_state(10);
    let mut rx = state.broadcaster.subscribe();

    let (_, body) = get(build_router(Arc::clone(&state)), "/test-primetime").await;

    assert_eq!(body["message"], "Primetime promo triggered");
    let frame: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
    assert_eq!(frame["payload"]["promoType"], "primetime_promo");
}

#[tokio::test]
async fn reset_game_broadcasts_bare_event() {
    let state = test_state(10);
    let mut rx = state.broadcaster.subscribe();

    let (status, body) = get(build_router(Arc::clone(&state)), "/reset-game").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Reset to game playing");
    assert_eq!(rx.try_recv().unwrap(), r#"{"event":"reset-to-game"}"#);
}

#[tokio::test]
async fn test_routes_succeed_with_no_connected_clients() {
    // broadcasting into an empty room is a no-op, not an error
    let (status, _) = get(build_router(test_state(10)), "/test-sports").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn landing_page_links_the_prototypes() {
    let app = build_router(test_state(10));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/toast-user-dismiss"));
    assert!(html.contains("/ribbon-auto-dismiss"));
    assert!(html.contains("/remote"));
}

#[tokio::test]
async fn prototype_pages_are_served() {
    for uri in [
        "/toast-user-dismiss",
        "/toast-auto-dismiss",
        "/ribbon-user-dismiss",
        "/ribbon-auto-dismiss",
        "/remote",
    ] {
        let app = build_router(test_state(10));
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}
