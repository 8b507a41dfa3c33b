use axum::extract::State;
use axum::response::Html;

use super::AppState;
use crate::error::AppError;
use crate::services::aggregate::{aggregate, sort_for_display};
use crate::templates::{render_index, IndexView, PurchaseSummary};

/// Builds the listing view: all medicines plus every purchase, newest first.
pub async fn build_index_view(state: &AppState) -> Result<IndexView, AppError> {
    let medicines = state.store.list_medicines().await?;
    let lines = state.store.purchase_lines().await?;

    let mut groups = aggregate(lines);
    sort_for_display(&mut groups);

    Ok(IndexView {
        medicines,
        customer_purchases: groups.into_iter().map(PurchaseSummary::from).collect(),
    })
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    log::info!("Listing medicines and purchases");
    let view = build_index_view(&state).await?;
    Ok(Html(render_index(&view)))
}
