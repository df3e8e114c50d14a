//! Boleta generation and retrieval

use std::sync::Arc;

use enerbill_common::{
    BillingError, Boleta, BoletaFilter, BoletaStore, Cliente, ClienteStore, LecturaStore,
    MedidorStore, NuevaBoleta, Periodo, Result, ESTADO_EMITIDA, LECTURAS_POR_MEDIDOR,
};
use tracing::{debug, info, instrument};

use crate::calculator::{calcular_totales, consumo_total, contribucion_medidor};
use crate::tarifa::Tarifa;

/// Orchestrates the monthly boleta run for one customer: precondition
/// checks, consumption aggregation, pricing, and the single durable
/// write.
pub struct BoletaService {
    clientes: Arc<dyn ClienteStore>,
    medidores: Arc<dyn MedidorStore>,
    lecturas: Arc<dyn LecturaStore>,
    boletas: Arc<dyn BoletaStore>,
    tarifa: Tarifa,
}

impl BoletaService {
    pub fn new(
        clientes: Arc<dyn ClienteStore>,
        medidores: Arc<dyn MedidorStore>,
        lecturas: Arc<dyn LecturaStore>,
        boletas: Arc<dyn BoletaStore>,
        tarifa: Tarifa,
    ) -> Self {
        Self {
            clientes,
            medidores,
            lecturas,
            boletas,
            tarifa,
        }
    }

    /// Generate the boleta for `id_cliente` covering `periodo`.
    ///
    /// Preconditions fail in a fixed order: inactive or missing
    /// customer, already-billed period, no active meters, then no
    /// readings at all. A meter without readings is skipped, not an
    /// error, as long as at least one meter contributes.
    #[instrument(skip(self))]
    pub async fn generar(&self, id_cliente: i32, periodo: Periodo) -> Result<Boleta> {
        let cliente = self
            .clientes
            .obtener(id_cliente)
            .await?
            .filter(|c| c.estado)
            .ok_or(BillingError::ClienteNotFound { id_cliente })?;

        if self.boletas.existe_para_periodo(id_cliente, periodo).await? {
            return Err(BillingError::BoletaDuplicada {
                id_cliente,
                anio: periodo.anio,
                mes: periodo.mes,
            });
        }

        let medidores = self.medidores.activos_de_cliente(id_cliente).await?;
        if medidores.is_empty() {
            return Err(BillingError::SinMedidoresActivos { id_cliente });
        }

        let mut contribuciones = Vec::with_capacity(medidores.len());
        for medidor in &medidores {
            let lecturas = self
                .lecturas
                .ultimas_de_medidor(medidor.id_medidor, LECTURAS_POR_MEDIDOR)
                .await?;

            if let Some(kwh) = contribucion_medidor(&lecturas) {
                debug!(
                    id_medidor = medidor.id_medidor,
                    kwh = %kwh,
                    lecturas = lecturas.len(),
                    "contribución del medidor"
                );
                contribuciones.push(kwh);
            }
        }
        if contribuciones.is_empty() {
            return Err(BillingError::SinLecturasValidas { id_cliente });
        }

        let kwh_total = consumo_total(id_cliente, periodo, contribuciones, self.tarifa.negativos)?;
        let totales = calcular_totales(kwh_total, &self.tarifa);

        let boleta = self
            .boletas
            .crear(NuevaBoleta {
                id_cliente: cliente.id_cliente,
                anio: periodo.anio,
                mes: periodo.mes,
                kwh_total: totales.kwh_total,
                tarifa_base: self.tarifa.tarifa_base,
                cargos: self.tarifa.cargos,
                iva: totales.iva,
                total_pagar: totales.total_pagar,
                estado: ESTADO_EMITIDA.to_string(),
            })
            .await?;

        info!(
            id_boleta = boleta.id_boleta,
            id_cliente,
            %periodo,
            total_pagar = %boleta.total_pagar,
            "boleta emitida"
        );
        Ok(boleta)
    }

    /// Boletas matching the filter, newest-created-first.
    pub async fn listar(&self, filtro: &BoletaFilter) -> Result<Vec<Boleta>> {
        self.boletas.listar(filtro).await
    }

    /// A boleta together with the customer it bills, for rendering.
    pub async fn obtener_con_cliente(&self, id_boleta: i32) -> Result<(Boleta, Cliente)> {
        let boleta = self
            .boletas
            .obtener(id_boleta)
            .await?
            .ok_or(BillingError::BoletaNotFound { id_boleta })?;

        let cliente = self
            .clientes
            .obtener(boleta.id_cliente)
            .await?
            .ok_or(BillingError::ClienteAsociadoNotFound {
                id_cliente: boleta.id_cliente,
            })?;

        Ok((boleta, cliente))
    }
}
