pub mod holding;
pub mod snapshot;
pub mod summary;

pub use holding::Holding;
pub use snapshot::HoldingsSnapshot;
pub use summary::PortfolioSummary;
