//! Search-as-you-type.
//!
//! Every keystroke calls [`SearchSession::submit`]. A call only reaches the
//! backend if no newer call arrived during the debounce period, and its
//! results are only returned if no newer call arrived while it was in
//! flight, so a slow stale response can never replace a fresher one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use storefront_types::ProductCard;

use super::search::SearchBackend;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct SearchSession {
    backend: Arc<dyn SearchBackend>,
    debounce: Duration,
    latest: AtomicU64,
}

impl SearchSession {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend, debounce: DEFAULT_DEBOUNCE, latest: AtomicU64::new(0) }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// `None` when this call was superseded by a newer one.
    pub async fn submit(&self, raw: &str) -> Option<Vec<ProductCard>> {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(seq) {
            tracing::trace!("[session] #{} debounced away", seq);
            return None;
        }

        let results = self.backend.search(raw).await;
        if !self.is_current(seq) {
            tracing::trace!("[session] #{} dropped stale results", seq);
            return None;
        }

        Some(results)
    }

    fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}
