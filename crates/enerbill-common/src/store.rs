//! Storage traits over the relational store
//!
//! Services depend on these traits, never on a concrete database, so
//! the billing logic is testable against in-memory implementations.
//! Every method runs as one unit of work; uniqueness rules are enforced
//! by the implementation (duplicate boleta period and duplicate meter
//! code surface as their domain errors, not as `Storage`).

use async_trait::async_trait;

use crate::error::Result;
use crate::types::boleta::{Boleta, BoletaFilter, NuevaBoleta};
use crate::types::cliente::Cliente;
use crate::types::lectura::Lectura;
use crate::types::medidor::{Medidor, NuevoMedidor};
use crate::types::periodo::Periodo;

/// Read access to customer records.
#[async_trait]
pub trait ClienteStore: Send + Sync {
    async fn obtener(&self, id_cliente: i32) -> Result<Option<Cliente>>;
}

/// Full access to meter records.
#[async_trait]
pub trait MedidorStore: Send + Sync {
    /// All meters, optionally narrowed to one customer.
    async fn listar(&self, id_cliente: Option<i32>) -> Result<Vec<Medidor>>;

    async fn obtener(&self, id_medidor: i32) -> Result<Option<Medidor>>;

    /// Active meters of one customer, the billable set.
    async fn activos_de_cliente(&self, id_cliente: i32) -> Result<Vec<Medidor>>;

    /// Insert a meter. Fails `CodigoMedidorDuplicado` when the code is
    /// already registered.
    async fn crear(&self, nuevo: NuevoMedidor) -> Result<Medidor>;

    /// Persist the full current state of an existing meter. Fails
    /// `MedidorNotFound` when the row is gone, `CodigoMedidorDuplicado`
    /// when the new code collides.
    async fn actualizar(&self, medidor: &Medidor) -> Result<Medidor>;

    /// Hard delete. Returns whether a row existed.
    async fn eliminar(&self, id_medidor: i32) -> Result<bool>;
}

/// Read access to meter readings.
#[async_trait]
pub trait LecturaStore: Send + Sync {
    /// The most recent readings of one meter, newest first by
    /// (anio, mes), at most `limite` rows.
    async fn ultimas_de_medidor(&self, id_medidor: i32, limite: i64) -> Result<Vec<Lectura>>;
}

/// Access to issued boletas.
#[async_trait]
pub trait BoletaStore: Send + Sync {
    async fn existe_para_periodo(&self, id_cliente: i32, periodo: Periodo) -> Result<bool>;

    /// Insert a boleta. Fails `BoletaDuplicada` when one already exists
    /// for the (cliente, periodo) pair, including when a concurrent
    /// insert won the race after `existe_para_periodo` said no.
    async fn crear(&self, nueva: NuevaBoleta) -> Result<Boleta>;

    async fn obtener(&self, id_boleta: i32) -> Result<Option<Boleta>>;

    /// Boletas matching the filter, newest-created-first.
    async fn listar(&self, filtro: &BoletaFilter) -> Result<Vec<Boleta>>;
}
