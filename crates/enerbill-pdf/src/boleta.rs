//! Fixed page layout of the printed boleta
//!
//! Reproduces the issued document line for line: title, customer
//! block, a horizontal rule, the charge lines, the bold total, and the
//! issuance footer. Positions are in points from the bottom-left of a
//! US-Letter page and must not drift, since printed and archived
//! boletas are compared visually.

use enerbill_common::{BillingError, Boleta, Cliente, Result};

use crate::writer::{Contenido, DocumentoPdf, Fuente};

// US-Letter
const ANCHO_PAGINA: f64 = 612.0;
const ALTO_PAGINA: f64 = 792.0;

// Body block alignment; the title sits at its own x
const MARGEN_IZQUIERDO: f64 = 50.0;
const TITULO_X: f64 = 200.0;
const FIN_REGLA_X: f64 = 560.0;

/// Render `boleta` for `cliente` as a complete single-page PDF held in
/// memory. The caller streams the bytes; nothing touches the
/// filesystem.
pub fn render_boleta(boleta: &Boleta, cliente: &Cliente) -> Result<Vec<u8>> {
    let mut contenido = Contenido::new();

    contenido.texto(
        Fuente::HelveticaBold,
        16,
        TITULO_X,
        750.0,
        "Boleta de Electricidad",
    );

    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        710.0,
        &format!("Cliente: {}", cliente.nombre_razon),
    );
    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        690.0,
        &format!("RUT: {}", cliente.rut),
    );
    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        670.0,
        &format!("Dirección: {}", cliente.direccion_facturacion),
    );
    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        650.0,
        &format!("Año: {} - Mes: {}", boleta.anio, boleta.mes),
    );

    contenido.linea(MARGEN_IZQUIERDO, 640.0, FIN_REGLA_X, 640.0);

    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        620.0,
        &format!("kWh Consumidos: {}", boleta.kwh_total),
    );
    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        600.0,
        &format!("Tarifa Base: ${}", boleta.tarifa_base),
    );
    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        580.0,
        &format!("Cargos: ${}", boleta.cargos),
    );
    contenido.texto(
        Fuente::Helvetica,
        12,
        MARGEN_IZQUIERDO,
        560.0,
        &format!("IVA: ${}", boleta.iva),
    );
    contenido.texto(
        Fuente::HelveticaBold,
        12,
        MARGEN_IZQUIERDO,
        540.0,
        &format!("TOTAL A PAGAR: ${}", boleta.total_pagar),
    );

    contenido.texto(
        Fuente::Helvetica,
        10,
        MARGEN_IZQUIERDO,
        500.0,
        &format!(
            "Emitida el: {}",
            boleta.created_at.format("%d/%m/%Y %H:%M:%S"),
        ),
    );
    contenido.texto(
        Fuente::Helvetica,
        10,
        MARGEN_IZQUIERDO,
        480.0,
        &format!("Estado: {}", boleta.estado),
    );

    DocumentoPdf::new(Vec::new())
        .escribir(
            ANCHO_PAGINA,
            ALTO_PAGINA,
            &contenido,
            &format!("Boleta {}", boleta.id_boleta),
        )
        .map_err(|e| BillingError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use enerbill_common::ESTADO_EMITIDA;
    use rust_decimal_macros::dec;

    fn contiene(buf: &[u8], needle: &str) -> bool {
        buf.windows(needle.len()).any(|w| w == needle.as_bytes())
    }

    fn boleta_de_prueba() -> (Boleta, Cliente) {
        let boleta = Boleta {
            id_boleta: 42,
            id_cliente: 7,
            anio: 2024,
            mes: 5,
            kwh_total: dec!(100),
            tarifa_base: dec!(50.0),
            cargos: dec!(5.0),
            iva: dec!(950.95),
            total_pagar: dec!(5955.95),
            estado: ESTADO_EMITIDA.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 15, 10, 30, 0).unwrap(),
        };
        let cliente = Cliente {
            id_cliente: 7,
            nombre_razon: "Comercial Ñuñoa Ltda.".to_string(),
            rut: "76.543.210-K".to_string(),
            direccion_facturacion: "Av. Irarrázaval 1234".to_string(),
            estado: true,
        };
        (boleta, cliente)
    }

    #[test]
    fn test_es_un_pdf_completo() {
        let (boleta, cliente) = boleta_de_prueba();
        let pdf = render_boleta(&boleta, &cliente).unwrap();

        assert!(pdf.starts_with(b"%PDF-1.7\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));
        assert!(contiene(&pdf, "/MediaBox [0 0 612 792]"));
        assert!(contiene(&pdf, "/Count 1"));
    }

    #[test]
    fn test_lineas_en_el_orden_del_documento() {
        let (boleta, cliente) = boleta_de_prueba();
        let pdf = render_boleta(&boleta, &cliente).unwrap();

        let posicion = |needle: &str| {
            pdf.windows(needle.len())
                .position(|w| w == needle.as_bytes())
                .unwrap_or_else(|| panic!("no aparece: {needle}"))
        };

        let titulo = posicion("(Boleta de Electricidad) Tj");
        let cliente_pos = posicion("(Cliente: Comercial \\321u\\361oa Ltda.) Tj");
        let rut = posicion("(RUT: 76.543.210-K) Tj");
        let kwh = posicion("(kWh Consumidos: 100) Tj");
        let total = posicion("(TOTAL A PAGAR: $5955.95) Tj");
        let emitida = posicion("(Emitida el: 15/05/2024 10:30:00) Tj");
        let estado = posicion("(Estado: emitida) Tj");

        assert!(titulo < cliente_pos);
        assert!(cliente_pos < rut);
        assert!(rut < kwh);
        assert!(kwh < total);
        assert!(total < emitida);
        assert!(emitida < estado);
    }

    #[test]
    fn test_diacriticos_como_escapes_octales() {
        let (boleta, cliente) = boleta_de_prueba();
        let pdf = render_boleta(&boleta, &cliente).unwrap();

        assert!(contiene(&pdf, "(Direcci\\363n: Av. Irarr\\341zaval 1234) Tj"));
        assert!(contiene(&pdf, "(A\\361o: 2024 - Mes: 5) Tj"));
    }

    #[test]
    fn test_total_en_negrita_y_montos_en_regular() {
        let (boleta, cliente) = boleta_de_prueba();
        let pdf = render_boleta(&boleta, &cliente).unwrap();

        assert!(contiene(
            &pdf,
            "/F2 12 Tf\n50 540 Td\n(TOTAL A PAGAR: $5955.95) Tj",
        ));
        assert!(contiene(&pdf, "/F1 12 Tf\n50 560 Td\n(IVA: $950.95) Tj"));
        assert!(contiene(&pdf, "/F1 10 Tf\n50 480 Td\n(Estado: emitida) Tj"));
    }

    #[test]
    fn test_regla_horizontal() {
        let (boleta, cliente) = boleta_de_prueba();
        let pdf = render_boleta(&boleta, &cliente).unwrap();

        assert!(contiene(&pdf, "50 640 m\n560 640 l\nS\n"));
    }

    #[test]
    fn test_titulo_del_documento() {
        let (boleta, cliente) = boleta_de_prueba();
        let pdf = render_boleta(&boleta, &cliente).unwrap();

        assert!(contiene(&pdf, "/Title (Boleta 42)"));
    }
}
