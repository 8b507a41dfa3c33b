use std::time::Duration;

use async_trait::async_trait;

use super::billing::{BillingRecord, BillingSink, ForwardError};

/// HTTP client for the financial-management service's purchase ingestion endpoint.
#[derive(Clone)]
pub struct FmsClient {
    client: reqwest::Client,
    url: String,
}

impl FmsClient {
    /// Without a timeout a stalled FMS holds the request open until the
    /// connection itself gives up.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BillingSink for FmsClient {
    async fn submit(&self, record: &BillingRecord) -> Result<(), ForwardError> {
        let response = self.client.post(&self.url).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForwardError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        log::debug!(
            "FMS accepted purchase {} medicine {}",
            record.purchase_id,
            record.medicine_id
        );
        Ok(())
    }
}
