use promocast_core::config::BROADCAST_CAPACITY;
use promocast_protocol::frames::EventFrame;
use tokio::sync::broadcast;

/// Fan-out events to all connected WS clients via tokio broadcast channel.
///
/// Broadcast means send-to-all-registered: every live subscriber gets every
/// event, including the client whose input triggered it.
pub struct EventBroadcaster {
    tx: broadcast::Sender<String>,
}

impl EventBroadcaster {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx }
    }

    /// New client subscribes to the broadcast stream.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Push a JSON event string to all subscribers.
    /// Silently drops if no subscribers exist.
    pub fn send(&self, payload: String) {
        let _ = self.tx.send(payload);
    }

    /// Serialize an event frame and push it to all subscribers.
    pub fn send_event(&self, event: &EventFrame) {
        self.send(event.to_json());
    }

    /// Number of currently connected subscribers.
    pub fn client_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
