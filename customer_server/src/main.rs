//! Customer server: reads settings from the environment, prepares the store, serves the CRUD API.
//!
//! Run from repo root: `cargo run -p customer-server`
//! Without PostgreSQL: `CUSTOMER_STORE=memory cargo run -p customer-server`

use customer_service::{
    app_router, ensure_customer_table, ensure_database_exists, AppState, CustomerRepository,
    InMemoryCustomerRepository, PgCustomerRepository, ServerConfig, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("customer_service=info,tower_http=info")),
        )
        .init();

    let repository: Arc<dyn CustomerRepository> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_customer_table(&pool).await?;
            Arc::new(PgCustomerRepository::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory customer store; data is lost on exit");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    let app = app_router(AppState::new(repository), config.body_limit);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("customer service listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
