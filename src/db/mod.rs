pub mod init;
pub mod utils;
pub mod write;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use sqlx::{Pool, Row, Sqlite};

use crate::{error::CacheError, models::Holding};

/// Local persistence of the last good holdings list.
#[async_trait]
pub trait HoldingsCache: Send + Sync {
    /// Replaces the stored holdings wholesale.
    async fn save(&self, holdings: &[Holding]) -> Result<(), CacheError>;
    /// Stored holdings sorted by symbol ascending.
    async fn fetch(&self) -> Result<Vec<Holding>, CacheError>;
    async fn delete_all(&self) -> Result<(), CacheError>;
    /// Time of the last successful save, `None` when nothing was ever stored.
    async fn last_updated(&self) -> Result<Option<DateTime<Local>>, CacheError>;
}

fn persistence(err: anyhow::Error) -> CacheError {
    CacheError::Persistence(format!("{:#}", err))
}

#[derive(Clone, Debug)]
pub struct SqliteHoldingsCache {
    connection: Pool<Sqlite>,
}

impl SqliteHoldingsCache {
    pub async fn new(connection: Pool<Sqlite>) -> Result<Self, CacheError> {
        init::create_holdings(&connection).await?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl HoldingsCache for SqliteHoldingsCache {
    async fn save(&self, holdings: &[Holding]) -> Result<(), CacheError> {
        let mut tx = self.connection.begin().await?;
        write::replace_holdings(holdings, &mut tx)
            .await
            .map_err(persistence)?;
        tx.commit().await?;

        Ok(())
    }

    async fn fetch(&self) -> Result<Vec<Holding>, CacheError> {
        let rows = sqlx::query(
            r#"
            SELECT symbol, quantity, ltp, avg_price, close, pnl
            FROM holdings
            ORDER BY symbol ASC
            "#,
        )
        .fetch_all(&self.connection)
        .await?;

        rows.into_iter()
            .map(utils::parse_holding)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(persistence)
    }

    async fn delete_all(&self) -> Result<(), CacheError> {
        sqlx::query("DELETE FROM holdings")
            .execute(&self.connection)
            .await?;

        Ok(())
    }

    async fn last_updated(&self) -> Result<Option<DateTime<Local>>, CacheError> {
        let row = sqlx::query("SELECT MAX(last_updated) AS last_updated FROM holdings")
            .fetch_one(&self.connection)
            .await?;

        let timestamp = row.try_get::<Option<i64>, _>("last_updated")?;
        Ok(timestamp.and_then(|ts| Local.timestamp_opt(ts, 0).single()))
    }
}
