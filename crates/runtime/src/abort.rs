//! One-shot cancellable settlement signal.
//!
//! Three independent event sources can end a delegated navigation: the
//! protocol response, timer expiry, and removal of the child frame. The
//! [`AbortSignal`] turns the failure sources into a single deterministic
//! settlement point: whichever raises first wins, every later raise is a
//! no-op.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::Error;

/// A one-shot terminal signal carrying the failure that settled it.
///
/// State machine: `pending → settled`, transitioned by the first
/// [`raise`](Self::raise). The signal is permanently settled afterwards.
/// The single consumer observes the outcome via [`raised`](Self::raised),
/// which completes even when the raise happened before it was awaited.
pub struct AbortSignal {
    tx: Mutex<Option<oneshot::Sender<Error>>>,
    rx: Mutex<Option<oneshot::Receiver<Error>>>,
    settled: AtomicBool,
}

impl AbortSignal {
    /// Creates a pending signal.
    pub fn new() -> Self {
        let (tx, rx) = oneshot::channel();
        Self {
            tx: Mutex::new(Some(tx)),
            rx: Mutex::new(Some(rx)),
            settled: AtomicBool::new(false),
        }
    }

    /// Settles the signal with `reason`.
    ///
    /// First writer wins; later raises are ignored. Raising after the
    /// consumer has already gone away is equally a no-op; there is nothing
    /// pending to settle.
    pub fn raise(&self, reason: Error) {
        if self.settled.swap(true, Ordering::SeqCst) {
            tracing::debug!(%reason, "abort signal already settled, ignoring raise");
            return;
        }
        tracing::debug!(%reason, "abort signal raised");
        if let Some(tx) = self.tx.lock().take() {
            let _ = tx.send(reason);
        }
    }

    /// Returns `true` once the signal has settled.
    pub fn is_raised(&self) -> bool {
        self.settled.load(Ordering::SeqCst)
    }

    /// Waits for the signal to settle and returns the carried failure.
    ///
    /// Single-consumer: one pending navigation subscribes per signal.
    pub async fn raised(&self) -> Error {
        let rx = self
            .rx
            .lock()
            .take()
            .expect("abort signal can only be awaited once");
        rx.await.unwrap_or(Error::ChannelClosed)
    }
}

impl Default for AbortSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AbortSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbortSignal")
            .field("settled", &self.is_raised())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn raise_before_await_still_delivers() {
        let signal = AbortSignal::new();
        signal.raise(Error::Timeout("expired".into()));

        assert!(signal.is_raised());
        let reason = signal.raised().await;
        assert!(reason.is_timeout());
    }

    #[tokio::test]
    async fn raise_after_await_delivers() {
        let signal = Arc::new(AbortSignal::new());

        let raiser = Arc::clone(&signal);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            raiser.raise(Error::FrameRemoved("removed from page".into()));
        });

        let reason = signal.raised().await;
        assert!(reason.is_interrupted());
    }

    #[tokio::test]
    async fn first_raise_wins() {
        let signal = AbortSignal::new();
        signal.raise(Error::FrameRemoved("removed from page".into()));
        signal.raise(Error::Timeout("expired".into()));

        let reason = signal.raised().await;
        assert!(reason.is_interrupted(), "later raise must not overwrite");
    }

    #[tokio::test]
    async fn raise_without_consumer_is_a_no_op() {
        let signal = AbortSignal::new();
        drop(signal.rx.lock().take());
        signal.raise(Error::Timeout("expired".into()));
        assert!(signal.is_raised());
    }
}
