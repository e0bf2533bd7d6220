use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::middleware::AuthUser;
use crate::models::Show;
use crate::services::BookingDraft;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking/show", post(select_show))
        .route("/booking/row", post(select_row))
        .route("/booking/cell", post(select_cell))
        .route("/booking/confirm", post(confirm))
        .route("/booking/cancel", post(cancel))
}

/* ---------- выбор сеанса ---------- */

#[derive(Debug, Deserialize)]
struct SelectShowRequest {
    show_id: i32,
}

#[derive(Debug, Serialize)]
struct SelectShowResponse {
    show: Show,
    rows: Vec<i32>,
}

// POST /api/booking/show
async fn select_show(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<SelectShowRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let (show, rows) = state.booking.select_show(user.id, req.show_id).await?;
    Ok(Json(SelectShowResponse { show, rows }))
}

/* ---------- выбор ряда и места ---------- */

#[derive(Debug, Deserialize)]
struct SelectRowRequest {
    pos_row: i32,
}

#[derive(Debug, Serialize)]
struct SelectRowResponse {
    cells: Vec<i32>,
}

// POST /api/booking/row
async fn select_row(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<SelectRowRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let cells = state.booking.select_row(user.id, req.pos_row).await?;
    Ok(Json(SelectRowResponse { cells }))
}

#[derive(Debug, Deserialize)]
struct SelectCellRequest {
    cell: i32,
}

// POST /api/booking/cell
async fn select_cell(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<SelectCellRequest>,
) -> Result<Json<BookingDraft>, ServiceError> {
    let draft = state.booking.select_cell(user.id, req.cell).await?;
    Ok(Json(draft))
}

/* ---------- подтверждение и отмена ---------- */

// POST /api/booking/confirm
async fn confirm(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    let ticket = state.booking.confirm(user.id).await?;
    tracing::info!(
        "user {} bought seat ({}, {}) of show {}",
        user.id,
        ticket.pos_row,
        ticket.cell,
        ticket.show_id
    );
    Ok((StatusCode::CREATED, Json(ticket)))
}

// POST /api/booking/cancel
async fn cancel(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, ServiceError> {
    state.booking.cancel(user.id).await;
    Ok(Json(serde_json::json!({ "message": "Бронирование отменено" })))
}
