use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PROMO_DELAY_SECS: u64 = 10;
pub const MAX_PAYLOAD_BYTES: usize = 64 * 1024; // 64 KB cap per inbound frame
pub const BROADCAST_CAPACITY: usize = 256;

/// Hour of day (local to the server clock) at which the contextual rule
/// switches from the sports promo to the primetime promo.
pub const PRIMETIME_START_HOUR: u32 = 16;

/// Top-level config (promocast.toml + PROMOCAST_* env overrides).
///
/// Config keys are kept single-word so `PROMOCAST_GATEWAY_PORT` and
/// `PROMOCAST_PROMO_DELAY` split cleanly onto `gateway.port` / `promo.delay`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromocastConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub promo: PromoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Moderator-facing promo settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoConfig {
    /// Seconds to wait after a client connects before the promo broadcast
    /// fires. Override with PROMOCAST_PROMO_DELAY.
    #[serde(default = "default_promo_delay")]
    pub delay: u64,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_PROMO_DELAY_SECS,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}
fn default_promo_delay() -> u64 {
    DEFAULT_PROMO_DELAY_SECS
}

impl PromocastConfig {
    /// Load config from a TOML file with PROMOCAST_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. PROMOCAST_CONFIG env var
    ///   3. ~/.promocast/promocast.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: PromocastConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("PROMOCAST_").split("_"))
            .extract()
            .map_err(|e| crate::error::PromocastError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.promocast/promocast.toml", home)
}
