pub mod dto;
pub mod holdings_api;
pub mod mapper;

use async_trait::async_trait;

pub use dto::UserHoldingDto;
pub use holdings_api::HoldingsApi;
pub use mapper::{MappingPolicy, map_holdings};

use crate::error::RemoteError;

/// Remote provider of raw holding records.
#[async_trait]
pub trait HoldingsSource: Send + Sync {
    async fn fetch_holdings(&self) -> Result<Vec<UserHoldingDto>, RemoteError>;
}
