//! Tarifa - the rate card applied when pricing consumption

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Behavior when the consumption summed across a customer's meters
/// comes out negative (out-of-order readings, meter swap without a
/// reset entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeConsumptionPolicy {
    /// Bill the absolute value and log a warning. Compatible with how
    /// boletas have historically been issued.
    #[default]
    AbsoluteValue,
    /// Refuse to generate the boleta so the readings get reviewed.
    Reject,
}

/// Rate card for one boleta run. Injected into the service so rates
/// come from configuration, not constants buried in the calculation.
#[derive(Debug, Clone)]
pub struct Tarifa {
    /// Unit rate, $ per kWh
    pub tarifa_base: Decimal,

    /// Fixed surcharge applied once per boleta
    pub cargos: Decimal,

    /// IVA rate as a fraction of the subtotal (0.19 = 19%)
    pub iva: Decimal,

    pub negativos: NegativeConsumptionPolicy,
}

impl Default for Tarifa {
    fn default() -> Self {
        Self {
            tarifa_base: dec!(50.0),
            cargos: dec!(5.0),
            iva: dec!(0.19),
            negativos: NegativeConsumptionPolicy::default(),
        }
    }
}
