use tracing::warn;

use crate::{api::dto::UserHoldingDto, error::DomainError, models::Holding};

/// How a batch reacts to a record that fails validation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MappingPolicy {
    /// The first invalid record fails the whole batch.
    #[default]
    FailFast,
    /// Invalid records are logged and dropped.
    SkipInvalid,
}

impl UserHoldingDto {
    pub fn to_holding(&self) -> Result<Holding, DomainError> {
        let pnl = (self.ltp() - self.avg_price()) * *self.quantity() as f64;
        if !pnl.is_finite() {
            return Err(DomainError::CalculationOverflow);
        }

        Holding::new(
            self.symbol(),
            *self.quantity(),
            *self.ltp(),
            *self.avg_price(),
            *self.close(),
            pnl,
        )
    }
}

pub fn map_holdings(
    records: &[UserHoldingDto],
    policy: MappingPolicy,
) -> Result<Vec<Holding>, DomainError> {
    match policy {
        MappingPolicy::FailFast => records.iter().map(UserHoldingDto::to_holding).collect(),
        MappingPolicy::SkipInvalid => Ok(records
            .iter()
            .filter_map(|record| match record.to_holding() {
                Ok(holding) => Some(holding),
                Err(err) => {
                    warn!(symbol = %record.symbol(), error = %err, "Skipping invalid holding");
                    None
                }
            })
            .collect()),
    }
}
