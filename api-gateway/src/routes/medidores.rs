//! Medidor endpoints

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use enerbill_common::{Medidor, MedidorPatch, NuevoMedidor};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListarParams {
    pub id_cliente: Option<i32>,
}

/// `GET /api/medidores/` - every meter, or one customer's.
pub async fn listar(
    State(state): State<AppState>,
    Query(params): Query<ListarParams>,
) -> Result<Json<Vec<Medidor>>, ApiError> {
    Ok(Json(state.medidores.listar(params.id_cliente).await?))
}

/// `GET /api/medidores/:id_medidor`
pub async fn obtener(
    State(state): State<AppState>,
    Path(id_medidor): Path<i32>,
) -> Result<Json<Medidor>, ApiError> {
    Ok(Json(state.medidores.obtener(id_medidor).await?))
}

/// `POST /api/medidores/` - register a meter; `estado` defaults to
/// active when omitted.
pub async fn crear(
    State(state): State<AppState>,
    Json(nuevo): Json<NuevoMedidor>,
) -> Result<Json<Medidor>, ApiError> {
    Ok(Json(state.medidores.crear(nuevo).await?))
}

/// `PUT /api/medidores/:id_medidor` - partial update; absent fields
/// keep their current value.
pub async fn actualizar(
    State(state): State<AppState>,
    Path(id_medidor): Path<i32>,
    Json(patch): Json<MedidorPatch>,
) -> Result<Json<Medidor>, ApiError> {
    Ok(Json(state.medidores.actualizar(id_medidor, patch).await?))
}

/// `DELETE /api/medidores/:id_medidor` - hard delete.
pub async fn eliminar(
    State(state): State<AppState>,
    Path(id_medidor): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    state.medidores.eliminar(id_medidor).await?;
    Ok(Json(json!({ "message": "Medidor eliminado correctamente" })))
}

/// `PUT /api/medidores/:id_medidor/estado` - toggle the active flag.
pub async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id_medidor): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let medidor = state.medidores.cambiar_estado(id_medidor).await?;
    let estado = if medidor.estado { "Activo" } else { "Inactivo" };
    Ok(Json(
        json!({ "message": format!("Estado cambiado a {estado}") }),
    ))
}
