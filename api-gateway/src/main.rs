//! EnerBill API Gateway binary
//!
//! Boots the shared pool, applies migrations, wires the stores into
//! the billing services and serves the REST API until ctrl-c.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enerbill_api_gateway::{router, AppState, GatewayConfig};
use enerbill_billing::{BoletaService, MedidorService};
use enerbill_store::{Database, PgBoletaStore, PgClienteStore, PgLecturaStore, PgMedidorStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = GatewayConfig::load()?;
    info!(
        host = %config.host,
        port = config.port,
        "iniciando EnerBill API Gateway v{}",
        enerbill_common::VERSION
    );

    let db = Database::connect(&config.database_url, config.max_connections).await?;
    db.run_migrations().await?;

    let clientes = Arc::new(PgClienteStore::new(db.pool().clone()));
    let medidores = Arc::new(PgMedidorStore::new(db.pool().clone()));
    let lecturas = Arc::new(PgLecturaStore::new(db.pool().clone()));
    let boletas = Arc::new(PgBoletaStore::new(db.pool().clone()));

    let state = AppState::new(
        BoletaService::new(
            clientes.clone(),
            medidores.clone(),
            lecturas,
            boletas,
            config.tarifa.clone(),
        ),
        MedidorService::new(clientes, medidores),
    );

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("escuchando en {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway detenido");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("no se pudo instalar el manejador de ctrl-c");
    info!("señal de apagado recibida");
}
