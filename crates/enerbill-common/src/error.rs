//! Error types for the billing system
//!
//! One variant per distinct failure. Display strings are the exact
//! Spanish messages the HTTP layer returns in its `detail` field, so
//! they must not be reworded without versioning the API.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using BillingError
pub type Result<T> = std::result::Result<T, BillingError>;

/// Coarse classification of a [`BillingError`], used by the HTTP layer
/// to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Referenced entity does not exist (or is inactive where activity
    /// is part of the lookup contract)
    NotFound,
    /// Uniqueness rule violated (duplicate boleta period, duplicate
    /// meter code)
    Conflict,
    /// Request is well-formed but the data does not allow the operation
    PreconditionFailed,
    /// Storage or rendering failure; nothing the caller can fix
    Internal,
}

/// Unified error type for billing operations
#[derive(Debug, Error)]
pub enum BillingError {
    // Generation preconditions, in the order they are checked
    #[error("Cliente no encontrado o inactivo")]
    ClienteNotFound { id_cliente: i32 },

    #[error("Ya existe una boleta para este mes")]
    BoletaDuplicada {
        id_cliente: i32,
        anio: i32,
        mes: i32,
    },

    #[error("El cliente no tiene medidores activos")]
    SinMedidoresActivos { id_cliente: i32 },

    #[error("No hay lecturas válidas para generar boleta")]
    SinLecturasValidas { id_cliente: i32 },

    // Rendering lookups
    #[error("Boleta no encontrada")]
    BoletaNotFound { id_boleta: i32 },

    #[error("Cliente asociado no encontrado")]
    ClienteAsociadoNotFound { id_cliente: i32 },

    // Medidor CRUD
    #[error("Medidor no encontrado")]
    MedidorNotFound { id_medidor: i32 },

    #[error("El cliente no existe")]
    ClienteInexistente { id_cliente: i32 },

    #[error("El código del medidor ya está registrado")]
    CodigoMedidorDuplicado { codigo_medidor: String },

    // Raised only under NegativeConsumptionPolicy::Reject
    #[error("Consumo total negativo para el período: {kwh_total} kWh")]
    ConsumoNegativo { id_cliente: i32, kwh_total: Decimal },

    #[error("Mes fuera de rango: {mes}")]
    PeriodoInvalido { mes: i32 },

    // Infrastructure
    #[error("Error de almacenamiento: {0}")]
    Storage(#[from] anyhow::Error),

    #[error("Error al generar el PDF: {0}")]
    Render(String),
}

impl BillingError {
    /// Classify this error into the taxonomy the HTTP layer maps to
    /// status codes (NotFound → 404, Conflict and PreconditionFailed →
    /// 400, Internal → 500).
    pub fn kind(&self) -> ErrorKind {
        match self {
            BillingError::ClienteNotFound { .. }
            | BillingError::BoletaNotFound { .. }
            | BillingError::ClienteAsociadoNotFound { .. }
            | BillingError::MedidorNotFound { .. } => ErrorKind::NotFound,

            BillingError::BoletaDuplicada { .. }
            | BillingError::CodigoMedidorDuplicado { .. } => ErrorKind::Conflict,

            BillingError::SinMedidoresActivos { .. }
            | BillingError::SinLecturasValidas { .. }
            | BillingError::ClienteInexistente { .. }
            | BillingError::ConsumoNegativo { .. }
            | BillingError::PeriodoInvalido { .. } => ErrorKind::PreconditionFailed,

            BillingError::Storage(_) | BillingError::Render(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages_are_stable() {
        let err = BillingError::ClienteNotFound { id_cliente: 7 };
        assert_eq!(err.to_string(), "Cliente no encontrado o inactivo");

        let err = BillingError::BoletaDuplicada {
            id_cliente: 7,
            anio: 2024,
            mes: 5,
        };
        assert_eq!(err.to_string(), "Ya existe una boleta para este mes");

        let err = BillingError::SinLecturasValidas { id_cliente: 7 };
        assert_eq!(err.to_string(), "No hay lecturas válidas para generar boleta");

        let err = BillingError::CodigoMedidorDuplicado {
            codigo_medidor: "MED-001".to_string(),
        };
        assert_eq!(err.to_string(), "El código del medidor ya está registrado");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            BillingError::MedidorNotFound { id_medidor: 1 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            BillingError::BoletaDuplicada {
                id_cliente: 1,
                anio: 2024,
                mes: 5
            }
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            BillingError::SinMedidoresActivos { id_cliente: 1 }.kind(),
            ErrorKind::PreconditionFailed
        );
        assert_eq!(
            BillingError::Render("stream truncated".to_string()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_storage_wraps_anyhow() {
        let err: BillingError = anyhow::anyhow!("connection reset").into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("connection reset"));
    }
}
