use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;

use super::Holding;

/// A holdings list and the time it was fetched from the remote source.
///
/// `from_cache` marks lists served from the local cache after a remote
/// failure; `fetched_at` is then the time of the last successful save.
#[derive(Clone, Debug, Getters, new, PartialEq)]
pub struct HoldingsSnapshot {
    holdings: Vec<Holding>,
    fetched_at: DateTime<Local>,
    from_cache: bool,
}

impl HoldingsSnapshot {
    pub fn fresh(holdings: Vec<Holding>) -> Self {
        Self::new(holdings, Local::now(), false)
    }

    pub fn into_parts(self) -> (Vec<Holding>, DateTime<Local>, bool) {
        (self.holdings, self.fetched_at, self.from_cache)
    }
}
