//! `promocast-gateway` — axum server that broadcasts timed promo events to
//! connected display clients and relays remote-control input.

pub mod app;
pub mod http;
pub mod ws;
