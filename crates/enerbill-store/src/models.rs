//! Row types mirroring the table layouts, converted into domain types
//! at the store boundary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use enerbill_common::{Boleta, Cliente, Lectura, Medidor};

#[derive(Debug, Clone, FromRow)]
pub(crate) struct ClienteRow {
    pub id_cliente: i32,
    pub nombre_razon: String,
    pub rut: String,
    pub direccion_facturacion: String,
    pub estado: bool,
}

impl From<ClienteRow> for Cliente {
    fn from(row: ClienteRow) -> Self {
        Cliente {
            id_cliente: row.id_cliente,
            nombre_razon: row.nombre_razon,
            rut: row.rut,
            direccion_facturacion: row.direccion_facturacion,
            estado: row.estado,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct MedidorRow {
    pub id_medidor: i32,
    pub id_cliente: i32,
    pub codigo_medidor: String,
    pub estado: bool,
}

impl From<MedidorRow> for Medidor {
    fn from(row: MedidorRow) -> Self {
        Medidor {
            id_medidor: row.id_medidor,
            id_cliente: row.id_cliente,
            codigo_medidor: row.codigo_medidor,
            estado: row.estado,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct LecturaRow {
    pub id_lectura: i32,
    pub id_medidor: i32,
    pub anio: i32,
    pub mes: i32,
    pub lectura_kwh: Decimal,
}

impl From<LecturaRow> for Lectura {
    fn from(row: LecturaRow) -> Self {
        Lectura {
            id_lectura: row.id_lectura,
            id_medidor: row.id_medidor,
            anio: row.anio,
            mes: row.mes,
            lectura_kwh: row.lectura_kwh,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct BoletaRow {
    pub id_boleta: i32,
    pub id_cliente: i32,
    pub anio: i32,
    pub mes: i32,
    pub kwh_total: Decimal,
    pub tarifa_base: Decimal,
    pub cargos: Decimal,
    pub iva: Decimal,
    pub total_pagar: Decimal,
    pub estado: String,
    pub created_at: DateTime<Utc>,
}

impl From<BoletaRow> for Boleta {
    fn from(row: BoletaRow) -> Self {
        Boleta {
            id_boleta: row.id_boleta,
            id_cliente: row.id_cliente,
            anio: row.anio,
            mes: row.mes,
            kwh_total: row.kwh_total,
            tarifa_base: row.tarifa_base,
            cargos: row.cargos,
            iva: row.iva,
            total_pagar: row.total_pagar,
            estado: row.estado,
            created_at: row.created_at,
        }
    }
}
