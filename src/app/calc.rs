use anyhow::{Context, Result};
use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::models::{Holding, PortfolioSummary};

fn to_decimal(value: f64, field: &str, symbol: &str) -> Result<Decimal> {
    Decimal::from_f64(value)
        .with_context(|| format!("Failed to convert {} of {} to Decimal", field, symbol))
}

fn accumulate(total: Decimal, price: Decimal, quantity: Decimal, symbol: &str) -> Result<Decimal> {
    price
        .checked_mul(quantity)
        .and_then(|value| total.checked_add(value))
        .with_context(|| format!("Summary overflow at {}", symbol))
}

pub fn summarize(holdings: &[Holding]) -> Result<PortfolioSummary> {
    let mut current_value = Decimal::ZERO;
    let mut total_investment = Decimal::ZERO;
    let mut todays_pnl = Decimal::ZERO;
    let mut total_pnl = Decimal::ZERO;

    for holding in holdings {
        let symbol = holding.symbol();
        let quantity = Decimal::from(*holding.quantity());
        let ltp = to_decimal(*holding.ltp(), "ltp", symbol)?;
        let avg_price = to_decimal(*holding.avg_price(), "avg_price", symbol)?;
        let close = to_decimal(*holding.close(), "close", symbol)?;
        let pnl = to_decimal(*holding.pnl(), "pnl", symbol)?;

        current_value = accumulate(current_value, ltp, quantity, symbol)?;
        total_investment = accumulate(total_investment, avg_price, quantity, symbol)?;
        todays_pnl = accumulate(todays_pnl, ltp - close, quantity, symbol)?;
        total_pnl = total_pnl
            .checked_add(pnl)
            .with_context(|| format!("Summary overflow at {}", symbol))?;
    }

    Ok(PortfolioSummary::new(
        current_value.round_dp(2),
        total_investment.round_dp(2),
        todays_pnl.round_dp(2),
        total_pnl.round_dp(2),
    ))
}
