//! `promocast-core` — shared configuration, errors, and the promo domain
//! model used by the gateway and protocol crates.

pub mod config;
pub mod error;
pub mod promo;

pub use config::PromocastConfig;
pub use error::{PromocastError, Result};
pub use promo::PromoType;
