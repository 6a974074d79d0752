//! Event name constants. These strings are the wire contract — renaming one
//! breaks every deployed display client.

/// Server → clients: render a promo overlay of the given type.
pub const SHOW_PROMO: &str = "show-promo";

/// Server → clients: drop any overlay and return to the base game state.
pub const RESET_TO_GAME: &str = "reset-to-game";

/// Client → server: an input command from the remote-control client.
pub const REMOTE_INPUT: &str = "remote-input";

/// Server → clients: a relayed `remote-input` payload, forwarded verbatim.
pub const TV_COMMAND: &str = "tv-command";
