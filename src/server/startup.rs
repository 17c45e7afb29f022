use std::net::SocketAddr;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Bind the TCP listener the server accepts connections on
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let addr = SocketAddr::new(config.host, config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::InternalError(format!("Failed to bind {}: {}", addr, e)))?;

    Ok(listener)
}

/// Resolves once the process receives Ctrl+C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received, stopping server");
}
