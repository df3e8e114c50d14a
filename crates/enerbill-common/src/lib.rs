//! # EnerBill Common
//!
//! Shared domain types, errors, and storage traits for the EnerBill
//! electricity billing system.
//!
//! ## Core Types
//!
//! - [`Cliente`]: customer record with billing address and tax ID
//! - [`Medidor`]: consumption meter tied to a customer
//! - [`Lectura`]: periodic cumulative kWh reading from a meter
//! - [`Boleta`]: issued invoice for one customer and one period
//! - [`Periodo`]: (anio, mes) billing period
//!
//! ## Storage
//!
//! The [`store`] module defines the async traits the billing services
//! depend on; `enerbill-store` provides the PostgreSQL implementation.

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BillingError, ErrorKind, Result};
pub use store::{BoletaStore, ClienteStore, LecturaStore, MedidorStore};
pub use types::{
    boleta::{Boleta, BoletaFilter, NuevaBoleta, ESTADO_EMITIDA},
    cliente::Cliente,
    lectura::Lectura,
    medidor::{Medidor, MedidorPatch, NuevoMedidor},
    periodo::Periodo,
};

/// EnerBill version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Readings fetched per meter when computing a delta: the latest and
/// the one before it.
pub const LECTURAS_POR_MEDIDOR: i64 = 2;
