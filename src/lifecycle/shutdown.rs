//! Shutdown coordination.

use tokio::sync::watch;

/// Coordinator that tells the listener to stop accepting connections.
///
/// Built on a watch channel so a receiver created after the trigger still
/// observes it.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of [`Shutdown`].
#[derive(Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolves once shutdown is triggered, or once the coordinator is gone.
    pub async fn recv(mut self) {
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}
