use anyhow::{Context, Result};
use sqlx::{Row, sqlite::SqliteRow};

use crate::models::Holding;

pub fn parse_holding(row: SqliteRow) -> Result<Holding> {
    let symbol: String = row
        .try_get("symbol")
        .context("Failed to read symbol of cached holding")?;
    let read = |column: &str| {
        row.try_get::<f64, _>(column)
            .with_context(|| format!("Failed to read {} of cached holding {}", column, symbol))
    };

    let quantity = row
        .try_get::<i64, _>("quantity")
        .with_context(|| format!("Failed to read quantity of cached holding {}", symbol))?;
    let ltp = read("ltp")?;
    let avg_price = read("avg_price")?;
    let close = read("close")?;
    let pnl = read("pnl")?;

    Holding::new(&symbol, quantity, ltp, avg_price, close, pnl)
        .with_context(|| format!("Invalid cached holding '{}'", symbol))
}
