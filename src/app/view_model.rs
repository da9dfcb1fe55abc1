use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError, Weak},
};

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

use crate::{error::HoldingsError, models::Holding, services::FetchCoordinator};

/// Re-enters the load path of the view model that produced a failure.
#[derive(Clone)]
pub struct RetryAction {
    target: Weak<HoldingsViewModel>,
}

impl RetryAction {
    pub async fn run(&self) {
        if let Some(view_model) = self.target.upgrade() {
            view_model.load().await;
        }
    }
}

impl fmt::Debug for RetryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryAction")
            .field("alive", &(self.target.strong_count() > 0))
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub enum HoldingsState {
    #[default]
    Idle,
    Loading,
    Loaded {
        holdings: Vec<Holding>,
        fetched_at: DateTime<Local>,
        from_cache: bool,
    },
    Failed {
        error: HoldingsError,
        retry: RetryAction,
    },
}

impl HoldingsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, HoldingsState::Loading)
    }

    pub fn holdings(&self) -> &[Holding] {
        match self {
            HoldingsState::Loaded { holdings, .. } => holdings,
            _ => &[],
        }
    }
}

/// Presentation state machine: Idle -> Loading -> Loaded | Failed.
///
/// The state is published through a watch channel, so observers always see the
/// latest value. Completion handlers are the only writers after a load starts.
pub struct HoldingsViewModel {
    coordinator: FetchCoordinator,
    state: watch::Sender<HoldingsState>,
    resume: Mutex<Option<HoldingsState>>,
    this: Weak<HoldingsViewModel>,
}

impl HoldingsViewModel {
    pub fn new(coordinator: FetchCoordinator) -> Arc<Self> {
        let (state, _) = watch::channel(HoldingsState::Idle);
        Arc::new_cyclic(|this| Self {
            coordinator,
            state,
            resume: Mutex::new(None),
            this: this.clone(),
        })
    }

    pub fn state(&self) -> HoldingsState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<HoldingsState> {
        self.state.subscribe()
    }

    pub fn changes(&self) -> WatchStream<HoldingsState> {
        WatchStream::new(self.state.subscribe())
    }

    fn resume_slot(&self) -> std::sync::MutexGuard<'_, Option<HoldingsState>> {
        self.resume.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a load unless one is already running.
    pub async fn load(&self) {
        // Loading, the resume slot and the in-flight attempt are set up under
        // the resume lock so `cancel` sees all three or none.
        let fetch = {
            let mut resume = self.resume_slot();
            let mut previous = None;
            let started = self.state.send_if_modified(|state| {
                if state.is_loading() {
                    return false;
                }
                previous = Some(std::mem::replace(state, HoldingsState::Loading));
                true
            });

            if !started {
                debug!("Holdings already loading, ignoring load request");
                return;
            }
            *resume = previous;
            self.coordinator.fetch()
        };

        match fetch.await {
            Ok(snapshot) => {
                let (holdings, fetched_at, from_cache) = snapshot.into_parts();
                self.complete(HoldingsState::Loaded {
                    holdings,
                    fetched_at,
                    from_cache,
                })
            }
            Err(HoldingsError::Cancelled) => debug!("Holdings load cancelled"),
            Err(error) => self.complete(HoldingsState::Failed {
                error,
                retry: RetryAction {
                    target: self.this.clone(),
                },
            }),
        }
    }

    pub async fn retry(&self) {
        self.load().await;
    }

    /// Teardown hook: cancels the outstanding fetch and leaves the loading state.
    pub fn cancel(&self) {
        let mut resume = self.resume_slot();
        self.coordinator.cancel();

        let Some(previous) = resume.take() else {
            return;
        };
        self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = previous;
            true
        });
    }

    fn complete(&self, next: HoldingsState) {
        self.resume_slot().take();
        self.state.send_replace(next);
    }
}
