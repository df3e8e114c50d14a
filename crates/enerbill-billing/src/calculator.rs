//! Consumption-to-charge calculation
//!
//! Pure functions over readings already fetched from storage. The
//! service layer supplies per-meter readings newest first; everything
//! here is deterministic and exact under `Decimal` arithmetic.

use enerbill_common::{BillingError, Lectura, Periodo, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::tarifa::{NegativeConsumptionPolicy, Tarifa};

/// Monetary totals derived from one period's billed consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct BoletaTotales {
    pub kwh_total: Decimal,
    pub subtotal: Decimal,
    pub iva: Decimal,
    pub total_pagar: Decimal,
}

/// Consumption contributed by one meter, given its most recent readings
/// newest first. `None` when the meter has no readings and therefore
/// does not participate in this boleta.
///
/// One reading means first-ever billing: the cumulative value is billed
/// as the period's usage. Two readings bill the delta between the two
/// newest periods, calendar-adjacent or not. The delta keeps its sign;
/// the policy in [`consumo_total`] acts on the invoice-level sum only.
pub fn contribucion_medidor(lecturas: &[Lectura]) -> Option<Decimal> {
    match lecturas {
        [] => None,
        [unica] => Some(unica.lectura_kwh),
        [ultima, anterior, ..] => Some(ultima.lectura_kwh - anterior.lectura_kwh),
    }
}

/// Sum per-meter contributions into the billed consumption, applying
/// the negative-total policy when the sum comes out below zero.
pub fn consumo_total(
    id_cliente: i32,
    periodo: Periodo,
    contribuciones: impl IntoIterator<Item = Decimal>,
    politica: NegativeConsumptionPolicy,
) -> Result<Decimal> {
    let bruto: Decimal = contribuciones.into_iter().sum();
    if bruto >= Decimal::ZERO {
        return Ok(bruto);
    }

    match politica {
        NegativeConsumptionPolicy::AbsoluteValue => {
            warn!(
                id_cliente,
                %periodo,
                kwh_bruto = %bruto,
                "consumo total negativo, se factura el valor absoluto"
            );
            Ok(bruto.abs())
        }
        NegativeConsumptionPolicy::Reject => Err(BillingError::ConsumoNegativo {
            id_cliente,
            kwh_total: bruto,
        }),
    }
}

/// Price the billed consumption over the rate card:
///
/// ```text
/// subtotal    = kwh_total * tarifa_base + cargos
/// iva         = round2(subtotal * iva_rate)
/// total_pagar = round2(subtotal + iva)
/// ```
///
/// `round2` rounds to cents, midpoints away from zero.
pub fn calcular_totales(kwh_total: Decimal, tarifa: &Tarifa) -> BoletaTotales {
    let subtotal = kwh_total * tarifa.tarifa_base + tarifa.cargos;
    let iva = redondear2(subtotal * tarifa.iva);
    let total_pagar = redondear2(subtotal + iva);

    BoletaTotales {
        kwh_total,
        subtotal,
        iva,
        total_pagar,
    }
}

fn redondear2(valor: Decimal) -> Decimal {
    valor.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
