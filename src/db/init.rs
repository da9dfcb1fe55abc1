use sqlx::sqlite::SqliteQueryResult;

pub async fn create_holdings(
    connection: &sqlx::Pool<sqlx::Sqlite>,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS holdings (
            symbol TEXT PRIMARY KEY NOT NULL,
            quantity INTEGER NOT NULL,
            ltp REAL NOT NULL,
            avg_price REAL NOT NULL,
            close REAL NOT NULL,
            pnl REAL NOT NULL,
            last_updated INTEGER NOT NULL
        )
        "#,
    )
    .execute(connection)
    .await
}
