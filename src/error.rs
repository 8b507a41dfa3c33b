use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DatabaseError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Request-level errors and their HTTP mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("No purchases found for this customer.")]
    NoPurchases,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: what })).into_response()
            }
            AppError::NoPurchases => (
                StatusCode::NOT_FOUND,
                AppError::NoPurchases.to_string(),
            )
                .into_response(),
            AppError::Database(e) => {
                log::error!("Internal error while handling request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal Server Error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
