use axum::extract::{Path, State};
use axum::response::Redirect;

use super::AppState;
use crate::error::AppError;
use crate::services::forward_customer;

/// Forwards a customer's purchases to the FMS and sends the browser back to
/// the listing. Per-line failures only show up in the server log.
pub async fn send_to_billing(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Redirect, AppError> {
    log::info!("Received billing request for customer {}", customer_id);

    let report =
        forward_customer(state.store.as_ref(), state.billing.as_ref(), customer_id).await?;

    if report.failed > 0 {
        log::warn!(
            "Billing for customer {} finished with {} of {} lines failed",
            customer_id,
            report.failed,
            report.sent + report.failed
        );
    } else {
        log::info!(
            "Billing for customer {} finished, {} lines sent",
            customer_id,
            report.sent
        );
    }

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{header, StatusCode};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use crate::handlers::tests::{app, body_string, request};
    use crate::services::aggregate::tests::{at, line};
    use crate::testing::{MemoryStore, RecordingSink};

    fn store() -> MemoryStore {
        MemoryStore::default().with_lines(vec![
            line(1, 5, 10, Decimal::new(250, 2), 3, at(5, 14)),
            line(1, 5, 11, Decimal::new(100, 2), 2, at(5, 14)),
            line(2, 5, 12, Decimal::new(399, 2), 1, at(7, 10)),
        ])
    }

    #[tokio::test]
    async fn redirects_to_listing_after_forwarding() {
        let sink = Arc::new(RecordingSink::default());

        let response = app(store(), sink.clone())
            .oneshot(request("POST", "/send_to_billing/5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        assert_eq!(sink.attempted_medicines(), vec![10, 11, 12]);
    }

    #[tokio::test]
    async fn redirects_even_when_lines_fail() {
        let sink = Arc::new(RecordingSink::rejecting(&[10, 11, 12]));

        let response = app(store(), sink.clone())
            .oneshot(request("POST", "/send_to_billing/5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(sink.attempts(), 3);
        assert!(sink.records().is_empty());
    }

    #[tokio::test]
    async fn unknown_customer_is_not_found() {
        let sink = Arc::new(RecordingSink::default());

        let response = app(store(), sink.clone())
            .oneshot(request("POST", "/send_to_billing/42"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "No purchases found for this customer."
        );
        assert_eq!(sink.attempts(), 0);
    }

    #[tokio::test]
    async fn billing_route_rejects_get() {
        let response = app(store(), Arc::new(RecordingSink::default()))
            .oneshot(request("GET", "/send_to_billing/5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
