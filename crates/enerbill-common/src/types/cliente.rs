//! Cliente - utility customer record

use serde::{Deserialize, Serialize};

/// Customer on record with the utility.
///
/// Maintained by the commercial back office; billing only reads it.
/// An inactive customer (`estado == false`) is excluded from boleta
/// generation but still resolvable for rendering already-issued boletas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id_cliente: i32,

    /// Legal or trade name printed on the boleta
    pub nombre_razon: String,

    /// Chilean tax identifier
    pub rut: String,

    /// Billing address printed on the boleta
    pub direccion_facturacion: String,

    /// Active flag
    pub estado: bool,
}
