//! PostgreSQL schema migrations for homesense storage.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS measurements (
            device_id TEXT NOT NULL,
            time BIGINT NOT NULL,
            temperature DOUBLE PRECISION NOT NULL,
            humidity DOUBLE PRECISION NOT NULL,
            PRIMARY KEY (device_id, time)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            device_id TEXT PRIMARY KEY,
            location TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_locations_location ON locations (location)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations complete");
    Ok(())
}
