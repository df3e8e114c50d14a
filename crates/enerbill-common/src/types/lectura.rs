//! Lectura - periodic cumulative meter reading

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cumulative kWh reading taken from a meter for one (anio, mes)
/// period. At most one per (medidor, anio, mes) is expected, though the
/// calculator does not rely on it. "Most recent" ordering is by
/// (anio, mes) descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lectura {
    pub id_lectura: i32,
    pub id_medidor: i32,
    pub anio: i32,
    pub mes: i32,

    /// Accumulated consumption at reading time, in kWh
    #[serde(with = "rust_decimal::serde::float")]
    pub lectura_kwh: Decimal,
}
