use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{Customer, Medicine, PurchaseLine};
use super::DatabaseError;

/// Read access to the pharmacy tables.
///
/// Handlers only talk to this trait, which keeps request handling independent
/// of a live PostgreSQL server.
#[async_trait]
pub trait PharmacyStore: Send + Sync {
    async fn list_medicines(&self) -> Result<Vec<Medicine>, DatabaseError>;

    /// Every purchase line in the store.
    async fn purchase_lines(&self) -> Result<Vec<PurchaseLine>, DatabaseError>;

    /// Purchase lines of a single customer, filtered by the database.
    async fn customer_purchase_lines(
        &self,
        customer_id: i32,
    ) -> Result<Vec<PurchaseLine>, DatabaseError>;

    async fn find_customer(&self, customer_id: i32) -> Result<Option<Customer>, DatabaseError>;

    async fn find_medicine(&self, medicine_id: i32) -> Result<Option<Medicine>, DatabaseError>;
}

const PURCHASE_LINES_SELECT: &str = "
    SELECT
        mb.purchase_id,
        mb.customer_id,
        p.full_name,
        mb.medicine_id,
        m.medicine_name,
        m.medicine_cost,
        mb.quantity,
        mb.purchase_date
    FROM medicine_bought mb
    JOIN pharmacy_customers p ON mb.customer_id = p.customer_id
    JOIN medicines m ON mb.medicine_id = m.medicine_id";

const PURCHASE_LINES_ORDER: &str = "ORDER BY mb.purchase_date DESC, mb.purchase_id";

/// PostgreSQL-backed store. Every call checks a connection out of the pool
/// and hands it back when the call returns, on success or error.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PharmacyStore for PgStore {
    async fn list_medicines(&self) -> Result<Vec<Medicine>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let medicines = sqlx::query_as::<_, Medicine>(
            "SELECT medicine_id, medicine_name, medicine_cost FROM medicines ORDER BY medicine_id",
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(medicines)
    }

    async fn purchase_lines(&self) -> Result<Vec<PurchaseLine>, DatabaseError> {
        let sql = format!("{} {}", PURCHASE_LINES_SELECT, PURCHASE_LINES_ORDER);
        let mut conn = self.pool.acquire().await?;
        let lines = sqlx::query_as::<_, PurchaseLine>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(lines)
    }

    async fn customer_purchase_lines(
        &self,
        customer_id: i32,
    ) -> Result<Vec<PurchaseLine>, DatabaseError> {
        let sql = format!(
            "{} WHERE mb.customer_id = $1 {}",
            PURCHASE_LINES_SELECT, PURCHASE_LINES_ORDER
        );
        let mut conn = self.pool.acquire().await?;
        let lines = sqlx::query_as::<_, PurchaseLine>(&sql)
            .bind(customer_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(lines)
    }

    async fn find_customer(&self, customer_id: i32) -> Result<Option<Customer>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT customer_id, full_name, contact_number, date_of_birth
             FROM pharmacy_customers
             WHERE customer_id = $1",
        )
        .bind(customer_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(customer)
    }

    async fn find_medicine(&self, medicine_id: i32) -> Result<Option<Medicine>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let medicine = sqlx::query_as::<_, Medicine>(
            "SELECT medicine_id, medicine_name, medicine_cost FROM medicines WHERE medicine_id = $1",
        )
        .bind(medicine_id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(medicine)
    }
}
