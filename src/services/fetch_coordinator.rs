use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use super::{cancel::CancelToken, holdings_repository::HoldingsRepository};
use crate::{error::HoldingsError, models::HoldingsSnapshot};

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    in_flight: Option<(u64, CancelToken)>,
}

/// Single-flight front of a [`HoldingsRepository`].
///
/// A new `fetch` supersedes the outstanding one: the older attempt is signalled,
/// and whatever it eventually produces is reported as [`HoldingsError::Cancelled`].
/// Only the latest attempt's outcome is ever returned as authoritative.
pub struct FetchCoordinator {
    repository: Arc<dyn HoldingsRepository>,
    slot: Mutex<Slot>,
}

impl FetchCoordinator {
    pub fn new(repository: Arc<dyn HoldingsRepository>) -> Self {
        Self {
            repository,
            slot: Mutex::new(Slot::default()),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> (u64, CancelToken) {
        let mut slot = self.slot();
        if let Some((generation, previous)) = slot.in_flight.take() {
            debug!(generation, "Superseding in-flight holdings fetch");
            previous.cancel();
        }

        let generation = slot.generation + 1;
        let token = CancelToken::new();
        slot.generation = generation;
        slot.in_flight = Some((generation, token.clone()));

        (generation, token)
    }

    /// Returns `true` if `generation` was still current and is now finished.
    fn finish(&self, generation: u64) -> bool {
        let mut slot = self.slot();
        let current = slot.in_flight.as_ref().map(|(current, _)| *current);
        if current != Some(generation) {
            return false;
        }
        slot.in_flight = None;
        true
    }

    /// Starts a fetch attempt.
    ///
    /// The attempt is registered, and any older one superseded, when `fetch` is
    /// called rather than when the returned future is first polled, so a
    /// `cancel` issued in between still reaches it.
    pub fn fetch(
        &self,
    ) -> impl Future<Output = Result<HoldingsSnapshot, HoldingsError>> + Send + '_ {
        let (generation, token) = self.begin();

        async move {
            let outcome = self.repository.fetch_holdings(&token).await;

            if !self.finish(generation) {
                debug!(generation, "Dropping outcome of superseded holdings fetch");
                return Err(HoldingsError::Cancelled);
            }

            outcome
        }
    }

    /// Signals the outstanding fetch, if any. Safe to call at any time.
    pub fn cancel(&self) {
        if let Some((generation, token)) = self.slot().in_flight.take() {
            debug!(generation, "Cancelling holdings fetch");
            token.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_in_flight(&self) -> bool {
        self.slot().in_flight.is_some()
    }
}

impl Drop for FetchCoordinator {
    fn drop(&mut self) {
        self.cancel();
    }
}
