//! Boleta endpoints

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use enerbill_common::{Boleta, BoletaFilter, Periodo};
use enerbill_pdf::render_boleta;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerarParams {
    pub id_cliente: i32,
}

/// `POST /api/boletas/generar?id_cliente=` - bill the current UTC
/// period for one customer.
pub async fn generar(
    State(state): State<AppState>,
    Query(params): Query<GenerarParams>,
) -> Result<Json<Boleta>, ApiError> {
    let boleta = state
        .boletas
        .generar(params.id_cliente, Periodo::actual())
        .await?;
    Ok(Json(boleta))
}

/// `GET /api/boletas/` - list, filterable by cliente, anio and mes in
/// any combination.
pub async fn listar(
    State(state): State<AppState>,
    Query(filtro): Query<BoletaFilter>,
) -> Result<Json<Vec<Boleta>>, ApiError> {
    Ok(Json(state.boletas.listar(&filtro).await?))
}

/// `GET /api/boletas/:id_boleta/pdf` - render the boleta and stream it
/// as a named download.
pub async fn pdf(
    State(state): State<AppState>,
    Path(id_boleta): Path<i32>,
) -> Result<Response, ApiError> {
    let (boleta, cliente) = state.boletas.obtener_con_cliente(id_boleta).await?;
    let bytes = render_boleta(&boleta, &cliente)?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"boleta_{id_boleta}.pdf\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
