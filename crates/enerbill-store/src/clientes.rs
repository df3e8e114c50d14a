//! PostgreSQL-backed customer lookups

use async_trait::async_trait;
use sqlx::PgPool;

use enerbill_common::{Cliente, ClienteStore, Result};

use crate::models::ClienteRow;

/// Read-only view over `clientes`. The table is maintained by the
/// commercial back office; billing never writes it.
#[derive(Clone)]
pub struct PgClienteStore {
    pool: PgPool,
}

impl PgClienteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClienteStore for PgClienteStore {
    async fn obtener(&self, id_cliente: i32) -> Result<Option<Cliente>> {
        let row = sqlx::query_as::<_, ClienteRow>(
            r#"
            SELECT id_cliente, nombre_razon, rut, direccion_facturacion, estado
            FROM clientes
            WHERE id_cliente = $1
            "#,
        )
        .bind(id_cliente)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo leer el cliente: {e}"))?;

        Ok(row.map(Cliente::from))
    }
}
