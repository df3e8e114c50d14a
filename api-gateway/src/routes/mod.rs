//! Route table and shared middleware

mod boletas;
mod medidores;

use axum::http::Method;
use axum::response::Json;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full route table over `state`. Paths and methods are
/// the compatibility surface; changing them breaks deployed clients.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        // Boletas
        .route("/api/boletas/generar", post(boletas::generar))
        .route("/api/boletas/", get(boletas::listar))
        .route("/api/boletas/:id_boleta/pdf", get(boletas::pdf))
        // Medidores
        .route(
            "/api/medidores/",
            get(medidores::listar).post(medidores::crear),
        )
        .route(
            "/api/medidores/:id_medidor",
            get(medidores::obtener)
                .put(medidores::actualizar)
                .delete(medidores::eliminar),
        )
        .route(
            "/api/medidores/:id_medidor/estado",
            put(medidores::cambiar_estado),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
