//! Medidor - consumption meter tied to a customer

use serde::{Deserialize, Serialize};

fn default_estado() -> bool {
    true
}

/// Physical consumption meter. One cliente owns many medidores; only
/// active ones (`estado == true`) participate in boleta generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medidor {
    pub id_medidor: i32,
    pub id_cliente: i32,

    /// Unique human-readable code stamped on the device
    pub codigo_medidor: String,

    /// Active flag
    pub estado: bool,
}

impl Medidor {
    /// Apply a partial update, field by field. Absent fields keep their
    /// current value.
    pub fn aplicar(&mut self, patch: MedidorPatch) {
        if let Some(id_cliente) = patch.id_cliente {
            self.id_cliente = id_cliente;
        }
        if let Some(codigo_medidor) = patch.codigo_medidor {
            self.codigo_medidor = codigo_medidor;
        }
        if let Some(estado) = patch.estado {
            self.estado = estado;
        }
    }
}

/// Payload for registering a meter. New meters default to active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NuevoMedidor {
    pub id_cliente: i32,
    pub codigo_medidor: String,
    #[serde(default = "default_estado")]
    pub estado: bool,
}

/// Typed partial update for a meter. Only these fields are updatable;
/// a field left `None` is not touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedidorPatch {
    pub id_cliente: Option<i32>,
    pub codigo_medidor: Option<String>,
    pub estado: Option<bool>,
}
