//! Periodo - (anio, mes) billing period

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};

/// Billing period identified by calendar year and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodo {
    pub anio: i32,
    pub mes: i32,
}

impl Periodo {
    /// Build a period, rejecting months outside 1..=12.
    pub fn new(anio: i32, mes: i32) -> Result<Self> {
        if !(1..=12).contains(&mes) {
            return Err(BillingError::PeriodoInvalido { mes });
        }
        Ok(Self { anio, mes })
    }

    /// The current UTC year and month. Boleta generation bills the
    /// period the request arrives in.
    pub fn actual() -> Self {
        let ahora = Utc::now();
        Self {
            anio: ahora.year(),
            mes: ahora.month() as i32,
        }
    }
}

impl std::fmt::Display for Periodo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.anio, self.mes)
    }
}
