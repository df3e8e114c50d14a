//! # EnerBill Store
//!
//! PostgreSQL persistence for the billing system: one `sqlx` pool
//! shared by four small stores, each implementing its trait from
//! `enerbill-common`.
//!
//! Uniqueness rules are enforced by the schema, not by application
//! pre-checks. The stores translate constraint violations into the
//! matching domain errors (`BoletaDuplicada`, `CodigoMedidorDuplicado`,
//! `ClienteInexistente`) so services behave identically under races.
//!
//! Migrations are embedded from `migrations/` and applied with
//! [`Database::run_migrations`] at startup.

mod boletas;
mod clientes;
mod db;
mod lecturas;
mod medidores;
mod models;

pub use boletas::PgBoletaStore;
pub use clientes::PgClienteStore;
pub use db::Database;
pub use lecturas::PgLecturaStore;
pub use medidores::PgMedidorStore;
