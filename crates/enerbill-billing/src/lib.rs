//! # EnerBill Billing
//!
//! Consumption-to-charge calculation and the boleta/medidor services.
//!
//! ## Billing Formula
//!
//! ```text
//! subtotal    = kwh_total * tarifa_base + cargos
//! iva         = round2(subtotal * iva_rate)
//! total_pagar = round2(subtotal + iva)
//! ```
//!
//! Where:
//! - kwh_total: sum of per-meter contributions (delta of the two most
//!   recent readings, or the single reading for first-ever billing)
//! - round2: half-up rounding to cents
//!
//! Rates come from [`Tarifa`], injected by the caller; negative summed
//! consumption is governed by [`NegativeConsumptionPolicy`].

pub mod boletas;
pub mod calculator;
pub mod medidores;
pub mod tarifa;

pub use boletas::BoletaService;
pub use calculator::{calcular_totales, consumo_total, contribucion_medidor, BoletaTotales};
pub use medidores::MedidorService;
pub use tarifa::{NegativeConsumptionPolicy, Tarifa};
