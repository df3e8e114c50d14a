//! Shared handler state

use std::sync::Arc;

use enerbill_billing::{BoletaService, MedidorService};

/// Services shared across handlers. Cloning copies two `Arc` handles.
#[derive(Clone)]
pub struct AppState {
    pub boletas: Arc<BoletaService>,
    pub medidores: Arc<MedidorService>,
}

impl AppState {
    pub fn new(boletas: BoletaService, medidores: MedidorService) -> Self {
        Self {
            boletas: Arc::new(boletas),
            medidores: Arc::new(medidores),
        }
    }
}
