//! Connection pool and migrations

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

use enerbill_common::Result;

/// Shared PostgreSQL connection pool. Cheap to clone; every store
/// holds a handle to the same pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a pool against `database_url`.
    #[instrument(skip(database_url))]
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        info!(max_connections, "conectando a PostgreSQL");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| anyhow::anyhow!("no se pudo conectar a PostgreSQL: {e}"))?;

        info!("pool de conexiones establecido");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query, for readiness probes.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow::anyhow!("health check falló: {e}"))?;
        Ok(())
    }

    /// Apply pending migrations embedded from `migrations/`.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<()> {
        info!("aplicando migraciones");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| anyhow::anyhow!("migración falló: {e}"))?;
        info!("esquema al día");
        Ok(())
    }
}
