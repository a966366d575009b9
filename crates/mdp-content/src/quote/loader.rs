//! Quote option loading with an explicit readiness signal.
//!
//! Filtered quote requests only make sense once the primary options have
//! been fetched. Every consumer shares one `ReadySignal` and awaits it, so the
//! ordering holds no matter how many consumers run at once.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{RwLock, watch};
use tokio::time::timeout;
use tracing::debug;

use crate::types::QuoteOption;

/// Errors reported by a quote backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not be completed.
    #[error("request to '{endpoint}' failed: {message}")]
    Request { endpoint: String, message: String },

    /// The response body was not a quote option tree.
    #[error("malformed response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The primary options did not load within the allowed wait.
    #[error("quote options not loaded after {}ms", waited.as_millis())]
    NotReady { waited: Duration },
}

/// Narrowing criteria for a filtered quote request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFilter {
    pub retirement_date: Option<String>,
    pub lump_sum: Option<f64>,
    pub selected_quote_name: Option<String>,
}

/// The calculation API, as seen by the loader.
pub trait QuoteBackend {
    /// Fetch the full option tree for the member.
    fn fetch_options(&self) -> impl Future<Output = Result<QuoteOption, BackendError>> + Send;

    /// Fetch options narrowed by `filter`.
    fn fetch_filtered(
        &self,
        filter: &QuoteFilter,
    ) -> impl Future<Output = Result<QuoteOption, BackendError>> + Send;
}

/// A one-way "ready" flag that any number of tasks can await.
///
/// Clones share the same flag.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    sender: Arc<watch::Sender<bool>>,
}

impl ReadySignal {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Mark the signal ready and wake every waiter. Idempotent.
    pub fn mark_ready(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.sender.borrow()
    }

    /// Wait until the signal is ready. Returns immediately if it already is.
    pub async fn wait(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so the wait cannot fail.
        let _ = receiver.wait_for(|ready| *ready).await;
    }
}

impl Default for ReadySignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads quote options and gates filtered requests on the first full load.
pub struct QuoteOptionsLoader<B> {
    backend: B,
    ready: ReadySignal,
    options: RwLock<Option<QuoteOption>>,
}

impl<B: QuoteBackend> QuoteOptionsLoader<B> {
    pub fn new(backend: B) -> Self {
        Self::with_signal(backend, ReadySignal::new())
    }

    /// Create a loader that reports readiness through an existing signal.
    pub fn with_signal(backend: B, ready: ReadySignal) -> Self {
        Self {
            backend,
            ready,
            options: RwLock::new(None),
        }
    }

    /// The readiness signal, for consumers that need to wait on it directly.
    pub fn ready(&self) -> &ReadySignal {
        &self.ready
    }

    /// Fetch the primary options, cache them and mark the loader ready.
    ///
    /// A failed fetch leaves the loader not ready.
    pub async fn load_options(&self) -> Result<QuoteOption, BackendError> {
        let options = self.backend.fetch_options().await?;
        *self.options.write().await = Some(options.clone());
        self.ready.mark_ready();
        debug!(options = options.options.len(), "quote options loaded");
        Ok(options)
    }

    /// Fetch filtered options once the primary options have loaded.
    ///
    /// Waits with no limit: if `load_options` never succeeds this never
    /// returns. Use [`Self::load_filtered_within`] to bound the wait.
    pub async fn load_filtered(&self, filter: &QuoteFilter) -> Result<QuoteOption, BackendError> {
        self.ready.wait().await;
        debug!(?filter, "fetching filtered quote options");
        self.backend.fetch_filtered(filter).await
    }

    /// Like [`Self::load_filtered`], but gives up with
    /// [`BackendError::NotReady`] if the primary options have not loaded
    /// within `wait`. The backend request itself is not time-limited.
    pub async fn load_filtered_within(
        &self,
        filter: &QuoteFilter,
        wait: Duration,
    ) -> Result<QuoteOption, BackendError> {
        if timeout(wait, self.ready.wait()).await.is_err() {
            debug!(
                ?filter,
                waited_ms = wait.as_millis(),
                "quote options never became ready"
            );
            return Err(BackendError::NotReady { waited: wait });
        }
        debug!(?filter, "fetching filtered quote options");
        self.backend.fetch_filtered(filter).await
    }

    /// The most recently loaded primary options.
    pub async fn options(&self) -> Option<QuoteOption> {
        self.options.read().await.clone()
    }
}
