//! PostgreSQL-backed meter CRUD

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use enerbill_common::{BillingError, Medidor, MedidorStore, NuevoMedidor, Result};

use crate::models::MedidorRow;

/// Full meter access over `medidores`. Code uniqueness and the cliente
/// foreign key are enforced by the schema; constraint violations come
/// back as their domain errors so callers see the same failure whether
/// they lost a race or skipped a pre-check.
#[derive(Clone)]
pub struct PgMedidorStore {
    pool: PgPool,
}

impl PgMedidorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MedidorStore for PgMedidorStore {
    async fn listar(&self, id_cliente: Option<i32>) -> Result<Vec<Medidor>> {
        let rows = sqlx::query_as::<_, MedidorRow>(
            r#"
            SELECT id_medidor, id_cliente, codigo_medidor, estado
            FROM medidores
            WHERE ($1::int4 IS NULL OR id_cliente = $1)
            ORDER BY id_medidor
            "#,
        )
        .bind(id_cliente)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo listar los medidores: {e}"))?;

        Ok(rows.into_iter().map(Medidor::from).collect())
    }

    async fn obtener(&self, id_medidor: i32) -> Result<Option<Medidor>> {
        let row = sqlx::query_as::<_, MedidorRow>(
            r#"
            SELECT id_medidor, id_cliente, codigo_medidor, estado
            FROM medidores
            WHERE id_medidor = $1
            "#,
        )
        .bind(id_medidor)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo leer el medidor: {e}"))?;

        Ok(row.map(Medidor::from))
    }

    async fn activos_de_cliente(&self, id_cliente: i32) -> Result<Vec<Medidor>> {
        let rows = sqlx::query_as::<_, MedidorRow>(
            r#"
            SELECT id_medidor, id_cliente, codigo_medidor, estado
            FROM medidores
            WHERE id_cliente = $1 AND estado = TRUE
            ORDER BY id_medidor
            "#,
        )
        .bind(id_cliente)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo listar los medidores activos: {e}"))?;

        Ok(rows.into_iter().map(Medidor::from).collect())
    }

    #[instrument(skip(self, nuevo), fields(codigo = %nuevo.codigo_medidor))]
    async fn crear(&self, nuevo: NuevoMedidor) -> Result<Medidor> {
        let row = sqlx::query_as::<_, MedidorRow>(
            r#"
            INSERT INTO medidores (id_cliente, codigo_medidor, estado)
            VALUES ($1, $2, $3)
            RETURNING id_medidor, id_cliente, codigo_medidor, estado
            "#,
        )
        .bind(nuevo.id_cliente)
        .bind(&nuevo.codigo_medidor)
        .bind(nuevo.estado)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                BillingError::CodigoMedidorDuplicado {
                    codigo_medidor: nuevo.codigo_medidor.clone(),
                }
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                BillingError::ClienteInexistente {
                    id_cliente: nuevo.id_cliente,
                }
            }
            _ => anyhow::anyhow!("no se pudo crear el medidor: {e}").into(),
        })?;

        info!(id_medidor = row.id_medidor, "medidor creado");
        Ok(row.into())
    }

    #[instrument(skip(self, medidor), fields(id_medidor = medidor.id_medidor))]
    async fn actualizar(&self, medidor: &Medidor) -> Result<Medidor> {
        let row = sqlx::query_as::<_, MedidorRow>(
            r#"
            UPDATE medidores
            SET id_cliente = $2, codigo_medidor = $3, estado = $4
            WHERE id_medidor = $1
            RETURNING id_medidor, id_cliente, codigo_medidor, estado
            "#,
        )
        .bind(medidor.id_medidor)
        .bind(medidor.id_cliente)
        .bind(&medidor.codigo_medidor)
        .bind(medidor.estado)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                BillingError::CodigoMedidorDuplicado {
                    codigo_medidor: medidor.codigo_medidor.clone(),
                }
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                BillingError::ClienteInexistente {
                    id_cliente: medidor.id_cliente,
                }
            }
            _ => anyhow::anyhow!("no se pudo actualizar el medidor: {e}").into(),
        })?
        .ok_or(BillingError::MedidorNotFound {
            id_medidor: medidor.id_medidor,
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn eliminar(&self, id_medidor: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM medidores WHERE id_medidor = $1")
            .bind(id_medidor)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow::anyhow!("no se pudo eliminar el medidor: {e}"))?;

        let eliminado = result.rows_affected() > 0;
        if eliminado {
            info!(id_medidor, "medidor eliminado");
        }
        Ok(eliminado)
    }
}
