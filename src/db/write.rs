use anyhow::Result;
use chrono::{DateTime, Local};
use sqlx::Sqlite;

use crate::models::Holding;

pub async fn insert_holding(
    holding: &Holding,
    updated_at: &DateTime<Local>,
    tx: &mut sqlx::Transaction<'_, Sqlite>,
) -> Result<()> {
    let quantity = i64::try_from(*holding.quantity())?;

    sqlx::query(
        r#"
        INSERT OR REPLACE INTO holdings
        (symbol, quantity, ltp, avg_price, close, pnl, last_updated)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(holding.id())
    .bind(quantity)
    .bind(holding.ltp())
    .bind(holding.avg_price())
    .bind(holding.close())
    .bind(holding.pnl())
    .bind(updated_at.timestamp())
    .execute(&mut **tx)
    .await?;

    Ok(())
}

pub async fn replace_holdings(holdings: &[Holding], tx: &mut sqlx::Transaction<'_, Sqlite>) -> Result<()> {
    sqlx::query("DELETE FROM holdings").execute(&mut **tx).await?;

    let updated_at = Local::now();
    for holding in holdings {
        insert_holding(holding, &updated_at, tx).await?;
    }

    Ok(())
}
