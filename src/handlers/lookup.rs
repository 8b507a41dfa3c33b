use axum::extract::{Path, State};
use axum::Json;

use super::AppState;
use crate::db::models::{Customer, Medicine};
use crate::error::AppError;

pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Customer>, AppError> {
    match state.store.find_customer(customer_id).await? {
        Some(customer) => Ok(Json(customer)),
        None => {
            log::warn!("Customer {} not found", customer_id);
            Err(AppError::NotFound("Customer not found"))
        }
    }
}

pub async fn get_medicine(
    State(state): State<AppState>,
    Path(medicine_id): Path<i32>,
) -> Result<Json<Medicine>, AppError> {
    match state.store.find_medicine(medicine_id).await? {
        Some(medicine) => Ok(Json(medicine)),
        None => {
            log::warn!("Medicine {} not found", medicine_id);
            Err(AppError::NotFound("Medicine not found"))
        }
    }
}
