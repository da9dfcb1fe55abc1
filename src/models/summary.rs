use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, new, PartialEq, Eq)]
pub struct PortfolioSummary {
    current_value: Decimal,
    total_investment: Decimal,
    todays_pnl: Decimal,
    total_pnl: Decimal,
}
