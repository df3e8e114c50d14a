//! Boleta - issued invoice for one customer and one billing period

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::periodo::Periodo;

/// Status assigned to every boleta this system creates. Further status
/// transitions (paid, voided) belong to other systems.
pub const ESTADO_EMITIDA: &str = "emitida";

/// Issued invoice. At most one exists per (id_cliente, anio, mes),
/// enforced by the storage layer. Immutable after creation; never
/// deleted here.
///
/// Monetary fields serialize as JSON numbers, matching the wire format
/// consumers already parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boleta {
    pub id_boleta: i32,
    pub id_cliente: i32,
    pub anio: i32,
    pub mes: i32,

    /// Billed consumption, summed across the customer's active meters
    #[serde(with = "rust_decimal::serde::float")]
    pub kwh_total: Decimal,

    /// Unit rate applied, in $ per kWh
    #[serde(with = "rust_decimal::serde::float")]
    pub tarifa_base: Decimal,

    /// Fixed surcharge applied once per boleta
    #[serde(with = "rust_decimal::serde::float")]
    pub cargos: Decimal,

    /// Value-added tax on the subtotal
    #[serde(with = "rust_decimal::serde::float")]
    pub iva: Decimal,

    /// Grand total, rounded to cents
    #[serde(with = "rust_decimal::serde::float")]
    pub total_pagar: Decimal,

    pub estado: String,
    pub created_at: DateTime<Utc>,
}

impl Boleta {
    pub fn periodo(&self) -> Periodo {
        Periodo {
            anio: self.anio,
            mes: self.mes,
        }
    }
}

/// Insert payload for a boleta. `id_boleta` and `created_at` are
/// assigned by the storage layer.
#[derive(Debug, Clone, Serialize)]
pub struct NuevaBoleta {
    pub id_cliente: i32,
    pub anio: i32,
    pub mes: i32,
    pub kwh_total: Decimal,
    pub tarifa_base: Decimal,
    pub cargos: Decimal,
    pub iva: Decimal,
    pub total_pagar: Decimal,
    pub estado: String,
}

/// Listing filter. Every present field narrows the result; an empty
/// filter lists everything, newest-created-first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoletaFilter {
    pub id_cliente: Option<i32>,
    pub anio: Option<i32>,
    pub mes: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_serializes_as_json_numbers() {
        let boleta = Boleta {
            id_boleta: 1,
            id_cliente: 10,
            anio: 2024,
            mes: 5,
            kwh_total: dec!(100),
            tarifa_base: dec!(50.0),
            cargos: dec!(5.0),
            iva: dec!(950.95),
            total_pagar: dec!(5955.95),
            estado: ESTADO_EMITIDA.to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&boleta).unwrap();
        assert_eq!(json["total_pagar"], serde_json::json!(5955.95));
        assert_eq!(json["iva"], serde_json::json!(950.95));
        assert_eq!(json["estado"], serde_json::json!("emitida"));
    }

    #[test]
    fn test_periodo_accessor() {
        let boleta = Boleta {
            id_boleta: 1,
            id_cliente: 10,
            anio: 2024,
            mes: 5,
            kwh_total: dec!(0),
            tarifa_base: dec!(0),
            cargos: dec!(0),
            iva: dec!(0),
            total_pagar: dec!(0),
            estado: ESTADO_EMITIDA.to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(boleta.periodo(), Periodo { anio: 2024, mes: 5 });
    }
}
