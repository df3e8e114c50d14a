//! Medidor registry operations

use std::sync::Arc;

use enerbill_common::{
    BillingError, ClienteStore, Medidor, MedidorPatch, MedidorStore, NuevoMedidor, Result,
};
use tracing::{info, instrument};

/// CRUD over the meter registry. Creation verifies the owning customer
/// exists; code uniqueness is the store's rule and surfaces as
/// `CodigoMedidorDuplicado`.
pub struct MedidorService {
    clientes: Arc<dyn ClienteStore>,
    medidores: Arc<dyn MedidorStore>,
}

impl MedidorService {
    pub fn new(clientes: Arc<dyn ClienteStore>, medidores: Arc<dyn MedidorStore>) -> Self {
        Self {
            clientes,
            medidores,
        }
    }

    pub async fn listar(&self, id_cliente: Option<i32>) -> Result<Vec<Medidor>> {
        self.medidores.listar(id_cliente).await
    }

    pub async fn obtener(&self, id_medidor: i32) -> Result<Medidor> {
        self.medidores
            .obtener(id_medidor)
            .await?
            .ok_or(BillingError::MedidorNotFound { id_medidor })
    }

    #[instrument(skip(self))]
    pub async fn crear(&self, nuevo: NuevoMedidor) -> Result<Medidor> {
        if self.clientes.obtener(nuevo.id_cliente).await?.is_none() {
            return Err(BillingError::ClienteInexistente {
                id_cliente: nuevo.id_cliente,
            });
        }

        let medidor = self.medidores.crear(nuevo).await?;
        info!(
            id_medidor = medidor.id_medidor,
            codigo_medidor = %medidor.codigo_medidor,
            "medidor registrado"
        );
        Ok(medidor)
    }

    /// Apply a typed partial update over the current row.
    pub async fn actualizar(&self, id_medidor: i32, patch: MedidorPatch) -> Result<Medidor> {
        let mut medidor = self.obtener(id_medidor).await?;
        medidor.aplicar(patch);
        self.medidores.actualizar(&medidor).await
    }

    /// Hard delete, matching how decommissioned meters are purged.
    #[instrument(skip(self))]
    pub async fn eliminar(&self, id_medidor: i32) -> Result<()> {
        if !self.medidores.eliminar(id_medidor).await? {
            return Err(BillingError::MedidorNotFound { id_medidor });
        }
        info!(id_medidor, "medidor eliminado");
        Ok(())
    }

    /// Flip the active flag, returning the updated meter.
    pub async fn cambiar_estado(&self, id_medidor: i32) -> Result<Medidor> {
        let mut medidor = self.obtener(id_medidor).await?;
        medidor.estado = !medidor.estado;
        self.medidores.actualizar(&medidor).await
    }
}
