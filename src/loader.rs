use crate::location::ResourceLocation;
use crate::provider::ResourceProvider;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Failure of a single resource fetch. Both variants collapse into
/// `LoadState::Failed` at the loader boundary; callers that need the
/// distinction match on the variant before conversion.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resource {location} unavailable: {reason}")]
    Unavailable { location: String, reason: String },
    #[error("resource {location} returned a malformed document: {source}")]
    Malformed {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Both documents of one load attempt. A `Ready` state with only one
/// document populated is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPair {
    pub left: Value,
    pub right: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Ready(DocumentPair),
    Failed(String),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

/// Fetches two JSON resources as a single logical unit.
///
/// The state is published once per load attempt: `Pending` until both
/// fetches settle, then `Ready` only if both succeeded and parsed,
/// `Failed` otherwise. A settled state is never overwritten.
pub struct Loader {
    provider: Arc<dyn ResourceProvider>,
    left: ResourceLocation,
    right: ResourceLocation,
    state: RwLock<LoadState>,
}

impl Loader {
    pub fn new(
        provider: Arc<dyn ResourceProvider>,
        left: ResourceLocation,
        right: ResourceLocation,
    ) -> Self {
        Self {
            provider,
            left,
            right,
            state: RwLock::new(LoadState::Pending),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoadState {
        self.state.read().clone()
    }

    /// Issue both fetches concurrently and wait for both to settle.
    ///
    /// Latency is bounded by the slower of the two fetches, not their sum.
    /// A failure of either resource dominates, but the other in-flight
    /// fetch is still awaited so no outcome goes unobserved.
    pub async fn start(&self) -> LoadState {
        let started = Instant::now();
        tracing::info!(left = %self.left, right = %self.right, "loading documents");

        let (left, right) = tokio::join!(
            self.provider.fetch(&self.left),
            self.provider.fetch(&self.right),
        );

        let next = match (left, right) {
            (Ok(left), Ok(right)) => {
                tracing::info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "both documents loaded"
                );
                LoadState::Ready(DocumentPair { left, right })
            }
            (left, right) => {
                let mut reasons = Vec::new();
                if let Err(error) = left {
                    reasons.push(error.to_string());
                }
                if let Err(error) = right {
                    reasons.push(error.to_string());
                }
                let message = reasons.join("; ");
                tracing::warn!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    %message,
                    "document load failed"
                );
                LoadState::Failed(message)
            }
        };

        let mut guard = self.state.write();
        if matches!(*guard, LoadState::Pending) {
            *guard = next;
        }
        guard.clone()
    }
}
