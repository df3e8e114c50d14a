//! # EnerBill PDF
//!
//! Renders an issued [`Boleta`](enerbill_common::Boleta) as a
//! single-page US-Letter PDF, entirely in memory.
//!
//! The writer is hand-built: the document shape never varies (one
//! page, two built-in Helvetica fonts, one uncompressed content
//! stream), so a fixed object layout with a classic xref table is all
//! the format requires. WinAnsi encoding covers every character the
//! Spanish labels and Chilean customer data use.

pub mod boleta;
pub mod writer;

pub use boleta::render_boleta;
