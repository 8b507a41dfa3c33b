use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::PharmacyStore;
use crate::error::AppError;
use crate::services::aggregate::{aggregate, line_count, PurchaseGroup};

/// Body of one billing call: a single medicine line of a purchase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BillingRecord {
    pub purchase_id: i32,
    pub customer_id: i32,
    pub medicine_id: i32,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub medicine_cost: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("request to FMS failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("FMS answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Destination for billing records.
#[async_trait]
pub trait BillingSink: Send + Sync {
    async fn submit(&self, record: &BillingRecord) -> Result<(), ForwardError>;
}

/// Outcome of one forwarding run. Only logged, never shown to the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForwardReport {
    pub sent: usize,
    pub failed: usize,
}

/// Splits purchase groups into per-line billing records, group by group.
pub fn billing_records(groups: &[PurchaseGroup]) -> Vec<BillingRecord> {
    groups
        .iter()
        .flat_map(|group| {
            group.medicines.iter().map(move |medicine| BillingRecord {
                purchase_id: group.purchase_id,
                customer_id: group.customer_id,
                medicine_id: medicine.medicine_id,
                quantity: medicine.quantity,
                medicine_cost: medicine.medicine_cost,
            })
        })
        .collect()
}

/// Sends every purchase line of `customer_id` to the billing sink.
///
/// Records go out one at a time in line order. A failed record is logged and
/// the remaining records are still sent. Nothing is retried and nothing marks
/// the lines as billed, so running this twice bills the customer twice.
pub async fn forward_customer(
    store: &dyn PharmacyStore,
    sink: &dyn BillingSink,
    customer_id: i32,
) -> Result<ForwardReport, AppError> {
    let lines = store.customer_purchase_lines(customer_id).await?;
    if lines.is_empty() {
        log::warn!("No purchases found for customer {}", customer_id);
        return Err(AppError::NoPurchases);
    }

    let groups = aggregate(lines);
    log::info!(
        "Forwarding {} purchase lines in {} purchases for customer {}",
        line_count(&groups),
        groups.len(),
        customer_id
    );

    let mut report = ForwardReport::default();
    for record in billing_records(&groups) {
        match sink.submit(&record).await {
            Ok(()) => report.sent += 1,
            Err(e) => {
                log::error!(
                    "Error sending purchase {} (medicine {}) to FMS: {}",
                    record.purchase_id,
                    record.medicine_id,
                    e
                );
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
