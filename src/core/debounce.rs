// src/core/debounce.rs
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::crypto;
use crate::models::{HashRecord, HashVariant};

#[derive(Debug)]
pub enum HashEvent {
    Computed(HashRecord),
    Cleared,
    Failed(String),
}

/// Recomputes a hash only once input has been quiet for `delay`.
///
/// Each call to [`HashDebouncer::input`] aborts whatever was still waiting,
/// so only the most recent value is ever hashed. Must be used inside a
/// tokio runtime.
pub struct HashDebouncer {
    delay: Duration,
    variant: HashVariant,
    pending: Option<JoinHandle<()>>,
    events: mpsc::UnboundedSender<HashEvent>,
}

impl HashDebouncer {
    pub fn new(delay: Duration, variant: HashVariant) -> (Self, mpsc::UnboundedReceiver<HashEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            variant,
            pending: None,
            events,
        };
        (debouncer, rx)
    }

    pub fn input(&mut self, password: impl Into<String>) {
        self.cancel();

        let password = password.into();
        if password.is_empty() {
            let _ = self.events.send(HashEvent::Cleared);
            return;
        }

        let events = self.events.clone();
        let delay = self.delay;
        let variant = self.variant;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let result = tokio::task::spawn_blocking(move || {
                crypto::generate_wordpress_hash_with_variant(&password, variant)
            })
            .await;

            let event = match result {
                Ok(Ok(record)) => HashEvent::Computed(record),
                Ok(Err(e)) => HashEvent::Failed(e.to_string()),
                Err(e) => HashEvent::Failed(format!("hash task failed: {}", e)),
            };
            let _ = events.send(event);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                log::trace!("Cancelling pending hash computation");
            }
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for HashDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const DELAY: Duration = Duration::from_millis(50);
    const WAIT: Duration = Duration::from_secs(30);

    #[tokio::test]
    async fn only_latest_input_is_hashed() {
        let (mut debouncer, mut rx) = HashDebouncer::new(DELAY, HashVariant::TwoY);
        debouncer.input("first");
        debouncer.input("second");

        let event = timeout(WAIT, rx.recv()).await.unwrap().unwrap();
        match event {
            HashEvent::Computed(record) => {
                assert_eq!(record.plaintext_input, "second");
                assert!(crypto::verify_wordpress_hash("second", &record.hash_output).unwrap());
            }
            other => panic!("unexpected event {:?}", other),
        }

        tokio::time::sleep(DELAY * 4).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn empty_input_clears_and_cancels() {
        let (mut debouncer, mut rx) = HashDebouncer::new(DELAY, HashVariant::TwoY);
        debouncer.input("typed");
        debouncer.input("");
        assert!(!debouncer.is_pending());

        let event = timeout(WAIT, rx.recv()).await.unwrap().unwrap();
        assert!(matches!(event, HashEvent::Cleared));

        tokio::time::sleep(DELAY * 4).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn dropping_debouncer_cancels_pending_work() {
        let (mut debouncer, mut rx) = HashDebouncer::new(DELAY, HashVariant::TwoY);
        debouncer.input("never hashed");
        assert!(debouncer.is_pending());
        drop(debouncer);

        // Channel closes once the aborted task releases its sender
        let next = timeout(WAIT, rx.recv()).await.unwrap();
        assert!(next.is_none());
    }
}
