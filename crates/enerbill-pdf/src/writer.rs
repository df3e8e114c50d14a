//! Low-level single-page PDF writer
//!
//! Hand-built PDF 1.7 output: indirect objects with tracked byte
//! offsets, a classic xref table with 20-byte entries, and a trailer
//! pointing at the catalog. Text uses the built-in Helvetica fonts with
//! WinAnsi encoding so Spanish diacritics render without embedding.
//!
//! The document shape is fixed (one page, two fonts, one content
//! stream), which keeps object numbering static and the xref dense.

use std::io::{self, Write};

const OBJ_CATALOGO: u32 = 1;
const OBJ_PAGINAS: u32 = 2;
const OBJ_FUENTE_REGULAR: u32 = 3;
const OBJ_FUENTE_NEGRITA: u32 = 4;
const OBJ_CONTENIDO: u32 = 5;
const OBJ_PAGINA: u32 = 6;
const OBJ_INFO: u32 = 7;

/// Fonts available to page content. `F1` is Helvetica, `F2` is
/// Helvetica-Bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuente {
    Helvetica,
    HelveticaBold,
}

impl Fuente {
    fn recurso(self) -> &'static str {
        match self {
            Fuente::Helvetica => "F1",
            Fuente::HelveticaBold => "F2",
        }
    }
}

/// Accumulates content-stream operators for the page. Coordinates use
/// PDF's bottom-left origin, in points.
#[derive(Debug, Default)]
pub struct Contenido {
    ops: String,
}

impl Contenido {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one line of text with its baseline at (x, y).
    pub fn texto(&mut self, fuente: Fuente, tamano: u32, x: f64, y: f64, texto: &str) {
        self.ops.push_str(&format!(
            "BT\n/{} {} Tf\n{} {} Td\n({}) Tj\nET\n",
            fuente.recurso(),
            tamano,
            coord(x),
            coord(y),
            escapar_winansi(texto),
        ));
    }

    /// Stroke a straight line from (x1, y1) to (x2, y2).
    pub fn linea(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push_str(&format!(
            "{} {} m\n{} {} l\nS\n",
            coord(x1),
            coord(y1),
            coord(x2),
            coord(y2),
        ));
    }

    fn bytes(&self) -> &[u8] {
        self.ops.as_bytes()
    }
}

/// Serializes one complete single-page document to any `Write` target,
/// tracking byte offsets for the xref table.
pub struct DocumentoPdf<W: Write> {
    writer: W,
    offset: usize,
    xref: Vec<(u32, usize)>,
}

impl<W: Write> DocumentoPdf<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            offset: 0,
            xref: Vec::new(),
        }
    }

    /// Write the whole document and return the inner writer: header,
    /// fonts, content stream, page objects, info, xref, and trailer.
    pub fn escribir(
        mut self,
        ancho: f64,
        alto: f64,
        contenido: &Contenido,
        titulo: &str,
    ) -> io::Result<W> {
        self.escribir_bytes(b"%PDF-1.7\n")?;
        // Binary comment: four bytes over 127 so transports treat the
        // file as binary
        self.escribir_bytes(b"%\xe2\xe3\xcf\xd3\n")?;

        self.escribir_objeto(
            OBJ_FUENTE_REGULAR,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        )?;
        self.escribir_objeto(
            OBJ_FUENTE_NEGRITA,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
        )?;

        let datos = contenido.bytes();
        self.xref.push((OBJ_CONTENIDO, self.offset));
        self.escribir_str(&format!(
            "{} 0 obj\n<< /Length {} >>\nstream\n",
            OBJ_CONTENIDO,
            datos.len(),
        ))?;
        self.escribir_bytes(datos)?;
        self.escribir_str("\nendstream\nendobj\n")?;

        self.escribir_objeto(
            OBJ_PAGINA,
            &format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R \
                 /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> >>",
                OBJ_PAGINAS,
                coord(ancho),
                coord(alto),
                OBJ_CONTENIDO,
                OBJ_FUENTE_REGULAR,
                OBJ_FUENTE_NEGRITA,
            ),
        )?;
        self.escribir_objeto(
            OBJ_PAGINAS,
            &format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", OBJ_PAGINA),
        )?;
        self.escribir_objeto(
            OBJ_CATALOGO,
            &format!("<< /Type /Catalog /Pages {} 0 R >>", OBJ_PAGINAS),
        )?;
        self.escribir_objeto(
            OBJ_INFO,
            &format!(
                "<< /Title ({}) /Producer (EnerBill) >>",
                escapar_winansi(titulo),
            ),
        )?;

        self.escribir_xref_y_trailer()?;
        Ok(self.writer)
    }

    fn escribir_objeto(&mut self, numero: u32, cuerpo: &str) -> io::Result<()> {
        self.xref.push((numero, self.offset));
        self.escribir_str(&format!("{} 0 obj\n{}\nendobj\n", numero, cuerpo))
    }

    fn escribir_xref_y_trailer(&mut self) -> io::Result<()> {
        let inicio_xref = self.offset;

        // Object numbering is dense, so sorting by number yields one
        // contiguous subsection
        self.xref.sort_by_key(|&(numero, _)| numero);
        let tamano = self.xref.last().map(|&(numero, _)| numero).unwrap_or(0) + 1;

        self.escribir_str(&format!("xref\n0 {}\n", tamano))?;
        // Free-list head, exactly 20 bytes like every entry
        self.escribir_bytes(b"0000000000 65535 f\r\n")?;
        let mut entradas = String::with_capacity(self.xref.len() * 20);
        for &(_, off) in &self.xref {
            entradas.push_str(&format!("{:010} {:05} n\r\n", off, 0));
        }
        self.escribir_str(&entradas)?;

        self.escribir_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\n",
            tamano, OBJ_CATALOGO, OBJ_INFO,
        ))?;
        self.escribir_str(&format!("startxref\n{}\n%%EOF\n", inicio_xref))
    }

    fn escribir_str(&mut self, s: &str) -> io::Result<()> {
        self.escribir_bytes(s.as_bytes())
    }

    fn escribir_bytes(&mut self, datos: &[u8]) -> io::Result<()> {
        self.writer.write_all(datos)?;
        self.offset += datos.len();
        Ok(())
    }
}

/// Escape a string for a PDF literal string under WinAnsi encoding.
///
/// Backslash and parentheses get backslash escapes; Latin-1 characters
/// above ASCII (á, é, ñ, °) become octal byte escapes; anything WinAnsi
/// cannot represent is replaced with `?`.
pub fn escapar_winansi(texto: &str) -> String {
    let mut resultado = String::with_capacity(texto.len());
    for c in texto.chars() {
        match c {
            '\\' => resultado.push_str("\\\\"),
            '(' => resultado.push_str("\\("),
            ')' => resultado.push_str("\\)"),
            ' '..='~' => resultado.push(c),
            '\u{a0}'..='\u{ff}' => resultado.push_str(&format!("\\{:03o}", c as u32)),
            _ => resultado.push('?'),
        }
    }
    resultado
}

/// Format a coordinate: integral values without a fraction, the rest
/// trimmed of trailing zeros.
fn coord(v: f64) -> String {
    if v == v.floor() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.4}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
