use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::cancel::CancelToken;
use crate::{
    api::{HoldingsSource, MappingPolicy, map_holdings},
    db::HoldingsCache,
    error::{CacheError, HoldingsError, RemoteError},
    models::{Holding, HoldingsSnapshot},
};

pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces the best-known holdings list for one fetch attempt.
#[async_trait]
pub trait HoldingsRepository: Send + Sync {
    async fn fetch_holdings(
        &self,
        cancel: &CancelToken,
    ) -> Result<HoldingsSnapshot, HoldingsError>;
}

/// Remote-first repository that falls back to the local cache.
pub struct HoldingsRepositoryImpl {
    remote: Arc<dyn HoldingsSource>,
    cache: Arc<dyn HoldingsCache>,
    policy: MappingPolicy,
    remote_timeout: Duration,
}

impl HoldingsRepositoryImpl {
    pub fn new(remote: Arc<dyn HoldingsSource>, cache: Arc<dyn HoldingsCache>) -> Self {
        Self {
            remote,
            cache,
            policy: MappingPolicy::default(),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    pub fn with_policy(mut self, policy: MappingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_remote_timeout(mut self, remote_timeout: Duration) -> Self {
        self.remote_timeout = remote_timeout;
        self
    }

    async fn fetch_remote(&self, cancel: &CancelToken) -> Result<Vec<Holding>, HoldingsError> {
        let records = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(HoldingsError::Cancelled),
            result = tokio::time::timeout(self.remote_timeout, self.remote.fetch_holdings()) => {
                result.map_err(|_| RemoteError::Timeout)??
            }
        };

        Ok(map_holdings(&records, self.policy)?)
    }

    async fn store(&self, holdings: &[Holding]) {
        if let Err(err) = self.cache.save(holdings).await {
            warn!(error = %err, "Failed to cache holdings");
        }
    }

    /// Reads the cached list with its save time. `None` when the cache is empty.
    async fn read_cache(&self) -> Result<Option<HoldingsSnapshot>, CacheError> {
        let holdings = self.cache.fetch().await?;
        if holdings.is_empty() {
            return Ok(None);
        }

        let saved_at = self.cache.last_updated().await?.ok_or_else(|| {
            CacheError::Persistence("cached holdings have no save time".to_string())
        })?;
        Ok(Some(HoldingsSnapshot::new(holdings, saved_at, true)))
    }

    async fn fallback(
        &self,
        original: HoldingsError,
        cancel: &CancelToken,
    ) -> Result<HoldingsSnapshot, HoldingsError> {
        let cached = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(HoldingsError::Cancelled),
            cached = self.read_cache() => cached,
        };

        match cached {
            Ok(Some(snapshot)) => {
                warn!(
                    error = %original,
                    count = snapshot.holdings().len(),
                    saved_at = %snapshot.fetched_at(),
                    "Serving cached holdings"
                );
                Ok(snapshot)
            }
            Ok(None) => {
                debug!("Cache is empty, surfacing remote failure");
                Err(original)
            }
            Err(err) => {
                warn!(error = %err, "Cache read failed during fallback");
                Err(original)
            }
        }
    }
}

#[async_trait]
impl HoldingsRepository for HoldingsRepositoryImpl {
    async fn fetch_holdings(
        &self,
        cancel: &CancelToken,
    ) -> Result<HoldingsSnapshot, HoldingsError> {
        if cancel.is_cancelled() {
            return Err(HoldingsError::Cancelled);
        }

        match self.fetch_remote(cancel).await {
            Ok(holdings) => {
                if cancel.is_cancelled() {
                    return Err(HoldingsError::Cancelled);
                }
                self.store(&holdings).await;
                info!(count = holdings.len(), "Fetched holdings");
                Ok(HoldingsSnapshot::fresh(holdings))
            }
            Err(HoldingsError::Cancelled) => Err(HoldingsError::Cancelled),
            Err(err) => {
                if cancel.is_cancelled() {
                    return Err(HoldingsError::Cancelled);
                }
                self.fallback(err, cancel).await
            }
        }
    }
}
