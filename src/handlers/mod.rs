use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::db::PharmacyStore;
use crate::services::BillingSink;

pub mod billing;
pub mod listing;
pub mod lookup;

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PharmacyStore>,
    pub billing: Arc<dyn BillingSink>,
}

impl AppState {
    pub fn new(store: Arc<dyn PharmacyStore>, billing: Arc<dyn BillingSink>) -> Self {
        Self { store, billing }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(listing::index))
        .route("/send_to_billing/:customer_id", post(billing::send_to_billing))
        .route("/api/customers/:customer_id", get(lookup::get_customer))
        .route("/api/medicines/:medicine_id", get(lookup::get_medicine))
        .with_state(state)
}
