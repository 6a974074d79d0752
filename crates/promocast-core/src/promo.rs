use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::PRIMETIME_START_HOUR;

/// Promo variant tag carried in `show-promo` events. The wire value is an
/// open set of strings; these are the two the server itself emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoType {
    SportsPromo,
    PrimetimePromo,
}

impl PromoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoType::SportsPromo => "sports_promo",
            PromoType::PrimetimePromo => "primetime_promo",
        }
    }
}

impl std::fmt::Display for PromoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick a promo type from the hour of day: 16:00 or later is primetime
/// context, earlier is daytime sports context.
///
/// The rule is pure in `now` so the gateway can pass the real wall clock
/// while tests pin any instant they like.
pub fn contextual_promo_type<Tz: TimeZone>(now: DateTime<Tz>) -> PromoType {
    if now.hour() >= PRIMETIME_START_HOUR {
        PromoType::PrimetimePromo
    } else {
        PromoType::SportsPromo
    }
}
