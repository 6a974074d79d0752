//! `promocast-protocol` — the JSON wire contract between the gateway and
//! display/remote clients.
//!
//! Everything travels as text frames over a single WebSocket. The event
//! names are the wire contract:
//!
//! | Event | Direction | Payload |
//! |---|---|---|
//! | `show-promo` | server → clients | `{"promoType": "<tag>"}` |
//! | `reset-to-game` | server → clients | none |
//! | `remote-input` | client → server | arbitrary |
//! | `tv-command` | server → clients | the relayed `remote-input` payload |

pub mod events;
pub mod frames;

pub use frames::{EventFrame, InboundFrame};
