//! Schema initialization for the todos table
//!
//! Runs once at process startup, before the server accepts requests.
//! Safe to run against an already-initialized database.

use sqlx::SqlitePool;

/// Create the todos table if it does not exist.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema initialization...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            done BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema initialization complete");
    Ok(())
}
