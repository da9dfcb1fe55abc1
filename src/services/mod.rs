pub mod cancel;
pub mod fetch_coordinator;
pub mod holdings_repository;

pub use cancel::CancelToken;
pub use fetch_coordinator::FetchCoordinator;
pub use holdings_repository::{HoldingsRepository, HoldingsRepositoryImpl};
