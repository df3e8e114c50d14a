//! Core data types for the EnerBill billing system

pub mod boleta;
pub mod cliente;
pub mod lectura;
pub mod medidor;
pub mod periodo;
