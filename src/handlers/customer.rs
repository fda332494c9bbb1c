//! Customer CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::Customer;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// POST /customer
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Customer>,
) -> Result<Json<Customer>, AppError> {
    let saved = state.customers.save(body).await?;
    Ok(Json(saved))
}

/// GET /customer
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, AppError> {
    let rows = state.customers.get_all().await?;
    Ok(Json(rows))
}

/// GET /customer/:id. An unknown id answers 200 with a JSON `null` body.
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<Customer>>, AppError> {
    let row = state.customers.get_by_id(id).await?;
    Ok(Json(row))
}

/// PUT /customer/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Customer>,
) -> Result<Json<Customer>, AppError> {
    let row = state.customers.update(id, body).await?;
    Ok(Json(row))
}

/// DELETE /customer/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.customers.delete(id).await?;
    Ok(StatusCode::OK)
}
