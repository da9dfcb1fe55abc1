#[cfg(test)]
mod tests {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
    use tempfile::TempDir;

    use crate::{
        db::{HoldingsCache, SqliteHoldingsCache},
        error::CacheError,
        test::stubs::holding,
    };

    async fn create_test_cache() -> (SqliteHoldingsCache, SqlitePool, TempDir) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let options = SqliteConnectOptions::new()
            .filename(temp_dir.path().join("holdings.db"))
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .expect("Failed to open database");
        let cache = SqliteHoldingsCache::new(pool.clone())
            .await
            .expect("Failed to create cache");

        (cache, pool, temp_dir)
    }

    #[tokio::test]
    async fn fetch_returns_holdings_sorted_by_symbol() {
        let (cache, _pool, _temp_dir) = create_test_cache().await;
        let holdings = vec![
            holding("TCS", 2, 3500.0, 3400.0, 3450.0),
            holding("HDFC", 5, 1500.0, 1600.0, 1520.0),
            holding("INFY", 4, 1500.0, 1400.0, 1450.0),
        ];

        cache.save(&holdings).await.unwrap();
        let stored = cache.fetch().await.unwrap();

        let symbols: Vec<&str> = stored.iter().map(|h| h.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["HDFC", "INFY", "TCS"]);
        assert_eq!(*stored[0].pnl(), -500.0);
        assert_eq!(*stored[0].quantity(), 5);
    }

    #[tokio::test]
    async fn save_replaces_previous_contents() {
        let (cache, _pool, _temp_dir) = create_test_cache().await;

        cache
            .save(&[
                holding("TCS", 2, 3500.0, 3400.0, 3450.0),
                holding("INFY", 4, 1500.0, 1400.0, 1450.0),
            ])
            .await
            .unwrap();
        cache
            .save(&[holding("RELIANCE", 10, 2500.0, 2400.0, 2480.0)])
            .await
            .unwrap();

        let stored = cache.fetch().await.unwrap();
        assert_eq!(stored, vec![holding("RELIANCE", 10, 2500.0, 2400.0, 2480.0)]);
    }

    #[tokio::test]
    async fn duplicate_symbols_keep_the_last_entry() {
        let (cache, _pool, _temp_dir) = create_test_cache().await;

        cache
            .save(&[
                holding("tcs", 2, 3500.0, 3400.0, 3450.0),
                holding("TCS", 3, 3600.0, 3400.0, 3450.0),
            ])
            .await
            .unwrap();

        let stored = cache.fetch().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(*stored[0].quantity(), 3);
    }

    #[tokio::test]
    async fn delete_all_clears_cache() {
        let (cache, _pool, _temp_dir) = create_test_cache().await;
        cache
            .save(&[holding("TCS", 2, 3500.0, 3400.0, 3450.0)])
            .await
            .unwrap();

        cache.delete_all().await.unwrap();

        assert!(cache.fetch().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn last_updated_tracks_saves() {
        let (cache, _pool, _temp_dir) = create_test_cache().await;
        assert!(cache.last_updated().await.unwrap().is_none());

        cache
            .save(&[holding("TCS", 2, 3500.0, 3400.0, 3450.0)])
            .await
            .unwrap();

        assert!(cache.last_updated().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_row_is_a_cache_error() {
        let (cache, pool, _temp_dir) = create_test_cache().await;
        sqlx::query(
            "INSERT INTO holdings (symbol, quantity, ltp, avg_price, close, pnl, last_updated) \
             VALUES ('BROKEN', -1, 100.0, 90.0, 95.0, 0.0, 0)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let result = cache.fetch().await;

        assert!(matches!(result, Err(CacheError::Persistence(_))));
    }
}
