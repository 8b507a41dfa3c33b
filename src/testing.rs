//! In-memory stand-ins for the datastore and the FMS used by unit tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::models::{Customer, Medicine, PurchaseLine};
use crate::db::{DatabaseError, PharmacyStore};
use crate::services::billing::{BillingRecord, BillingSink, ForwardError};

#[derive(Default)]
pub struct MemoryStore {
    medicines: Vec<Medicine>,
    customers: Vec<Customer>,
    lines: Vec<PurchaseLine>,
    broken: bool,
}

impl MemoryStore {
    /// A store whose every call fails like a lost database connection.
    pub fn failing() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn with_medicines(mut self, medicines: Vec<Medicine>) -> Self {
        self.medicines = medicines;
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_lines(mut self, lines: Vec<PurchaseLine>) -> Self {
        self.lines = lines;
        self
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.broken {
            Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PharmacyStore for MemoryStore {
    async fn list_medicines(&self) -> Result<Vec<Medicine>, DatabaseError> {
        self.check()?;
        Ok(self.medicines.clone())
    }

    async fn purchase_lines(&self) -> Result<Vec<PurchaseLine>, DatabaseError> {
        self.check()?;
        Ok(self.lines.clone())
    }

    async fn customer_purchase_lines(
        &self,
        customer_id: i32,
    ) -> Result<Vec<PurchaseLine>, DatabaseError> {
        self.check()?;
        Ok(self
            .lines
            .iter()
            .filter(|line| line.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_customer(&self, customer_id: i32) -> Result<Option<Customer>, DatabaseError> {
        self.check()?;
        Ok(self
            .customers
            .iter()
            .find(|customer| customer.customer_id == customer_id)
            .cloned())
    }

    async fn find_medicine(&self, medicine_id: i32) -> Result<Option<Medicine>, DatabaseError> {
        self.check()?;
        Ok(self
            .medicines
            .iter()
            .find(|medicine| medicine.medicine_id == medicine_id)
            .cloned())
    }
}

/// Records every submitted billing record and rejects the listed medicines.
#[derive(Default)]
pub struct RecordingSink {
    attempts: Mutex<Vec<BillingRecord>>,
    reject: HashSet<i32>,
}

impl RecordingSink {
    pub fn rejecting(medicine_ids: &[i32]) -> Self {
        Self {
            attempts: Mutex::default(),
            reject: medicine_ids.iter().copied().collect(),
        }
    }

    /// Records that were accepted.
    pub fn records(&self) -> Vec<BillingRecord> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|record| !self.reject.contains(&record.medicine_id))
            .cloned()
            .collect()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }

    pub fn attempted_medicines(&self) -> Vec<i32> {
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .map(|record| record.medicine_id)
            .collect()
    }
}

#[async_trait]
impl BillingSink for RecordingSink {
    async fn submit(&self, record: &BillingRecord) -> Result<(), ForwardError> {
        self.attempts.lock().unwrap().push(record.clone());
        if self.reject.contains(&record.medicine_id) {
            return Err(ForwardError::Rejected {
                status: 500,
                body: "rejected".to_string(),
            });
        }
        Ok(())
    }
}
