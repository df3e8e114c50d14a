//! PostgreSQL-backed reading lookups

use async_trait::async_trait;
use sqlx::PgPool;

use enerbill_common::{Lectura, LecturaStore, Result};

use crate::models::LecturaRow;

/// Read-only view over `lecturas`. Rows are fed by the metering
/// pipeline; billing only consumes them.
#[derive(Clone)]
pub struct PgLecturaStore {
    pool: PgPool,
}

impl PgLecturaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LecturaStore for PgLecturaStore {
    async fn ultimas_de_medidor(&self, id_medidor: i32, limite: i64) -> Result<Vec<Lectura>> {
        let rows = sqlx::query_as::<_, LecturaRow>(
            r#"
            SELECT id_lectura, id_medidor, anio, mes, lectura_kwh
            FROM lecturas
            WHERE id_medidor = $1
            ORDER BY anio DESC, mes DESC
            LIMIT $2
            "#,
        )
        .bind(id_medidor)
        .bind(limite)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo leer las lecturas: {e}"))?;

        Ok(rows.into_iter().map(Lectura::from).collect())
    }
}
