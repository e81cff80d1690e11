//! Shutdown coordination for the relay.

use tokio::sync::broadcast;

/// Broadcast-based shutdown trigger.
///
/// The server holds a receiver; tests (and any future sidecar tasks) hold
/// the sender side and call [`Shutdown::trigger`] to stop it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
