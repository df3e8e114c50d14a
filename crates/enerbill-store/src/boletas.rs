//! PostgreSQL-backed boleta persistence

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use enerbill_common::{
    BillingError, Boleta, BoletaFilter, BoletaStore, NuevaBoleta, Periodo, Result,
};

use crate::models::BoletaRow;

/// Boleta access over `boletas`. The one-per-period rule lives in the
/// `UNIQUE (id_cliente, anio, mes)` constraint, so two concurrent
/// generation requests cannot both insert; the loser surfaces
/// `BoletaDuplicada` exactly as if it had failed the pre-check.
#[derive(Clone)]
pub struct PgBoletaStore {
    pool: PgPool,
}

impl PgBoletaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoletaStore for PgBoletaStore {
    async fn existe_para_periodo(&self, id_cliente: i32, periodo: Periodo) -> Result<bool> {
        let existe: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM boletas
                WHERE id_cliente = $1 AND anio = $2 AND mes = $3
            )
            "#,
        )
        .bind(id_cliente)
        .bind(periodo.anio)
        .bind(periodo.mes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo consultar el período: {e}"))?;

        Ok(existe)
    }

    #[instrument(skip(self, nueva), fields(id_cliente = nueva.id_cliente))]
    async fn crear(&self, nueva: NuevaBoleta) -> Result<Boleta> {
        let row = sqlx::query_as::<_, BoletaRow>(
            r#"
            INSERT INTO boletas (id_cliente, anio, mes, kwh_total, tarifa_base, cargos, iva, total_pagar, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id_boleta, id_cliente, anio, mes, kwh_total, tarifa_base, cargos, iva, total_pagar, estado, created_at
            "#,
        )
        .bind(nueva.id_cliente)
        .bind(nueva.anio)
        .bind(nueva.mes)
        .bind(nueva.kwh_total)
        .bind(nueva.tarifa_base)
        .bind(nueva.cargos)
        .bind(nueva.iva)
        .bind(nueva.total_pagar)
        .bind(&nueva.estado)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                BillingError::BoletaDuplicada {
                    id_cliente: nueva.id_cliente,
                    anio: nueva.anio,
                    mes: nueva.mes,
                }
            }
            _ => anyhow::anyhow!("no se pudo registrar la boleta: {e}").into(),
        })?;

        info!(id_boleta = row.id_boleta, "boleta registrada");
        Ok(row.into())
    }

    async fn obtener(&self, id_boleta: i32) -> Result<Option<Boleta>> {
        let row = sqlx::query_as::<_, BoletaRow>(
            r#"
            SELECT id_boleta, id_cliente, anio, mes, kwh_total, tarifa_base, cargos, iva, total_pagar, estado, created_at
            FROM boletas
            WHERE id_boleta = $1
            "#,
        )
        .bind(id_boleta)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo leer la boleta: {e}"))?;

        Ok(row.map(Boleta::from))
    }

    async fn listar(&self, filtro: &BoletaFilter) -> Result<Vec<Boleta>> {
        let rows = sqlx::query_as::<_, BoletaRow>(
            r#"
            SELECT id_boleta, id_cliente, anio, mes, kwh_total, tarifa_base, cargos, iva, total_pagar, estado, created_at
            FROM boletas
            WHERE ($1::int4 IS NULL OR id_cliente = $1)
              AND ($2::int4 IS NULL OR anio = $2)
              AND ($3::int4 IS NULL OR mes = $3)
            ORDER BY created_at DESC, id_boleta DESC
            "#,
        )
        .bind(filtro.id_cliente)
        .bind(filtro.anio)
        .bind(filtro.mes)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow::anyhow!("no se pudo listar las boletas: {e}"))?;

        Ok(rows.into_iter().map(Boleta::from).collect())
    }
}
