use tokio_postgres::NoTls;
use tracing::info;

use crate::store::StoreError;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("./migrations");
}

/// Applies the embedded schema migrations. Idempotent, safe to run on every
/// process start; already-applied versions are skipped.
pub async fn run_migrations(database_url: &str) -> Result<(), StoreError> {
    info!("Running database migrations...");

    // Create database connection with a timeout
    let connect_result = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        tokio_postgres::connect(database_url, NoTls),
    )
    .await
    .map_err(|_| StoreError::Migration("database connection timed out".to_string()))?;

    let (mut client, connection) =
        connect_result.map_err(|e| StoreError::Migration(e.to_string()))?;

    // Spawn connection handling future to a separate task
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("Connection error: {}", e);
        }
    });

    let report = embedded::migrations::runner()
        .run_async(&mut client)
        .await
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    for migration in report.applied_migrations() {
        info!("Applied migration version {}", migration.version());
    }

    Ok(())
}
