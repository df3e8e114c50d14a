//! # EnerBill API Gateway
//!
//! axum HTTP surface over the billing services: boleta generation,
//! listing and PDF download, plus the medidor registry. Handlers stay
//! thin; domain rules live in `enerbill-billing` and persistence in
//! `enerbill-store`. Paths, status codes and the Spanish `detail`
//! messages are the compatibility contract with deployed clients.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::GatewayConfig;
pub use routes::router;
pub use state::AppState;
