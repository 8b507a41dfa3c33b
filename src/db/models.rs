use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Medicine {
    pub medicine_id: i32,
    pub medicine_name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub medicine_cost: Decimal,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub customer_id: i32,
    pub full_name: String,
    pub contact_number: String,
    pub date_of_birth: NaiveDate,
}

/// One `medicine_bought` row joined with its medicine and customer.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct PurchaseLine {
    pub purchase_id: i32,
    pub customer_id: i32,
    pub full_name: String,
    pub medicine_id: i32,
    pub medicine_name: String,
    pub medicine_cost: Decimal,
    pub quantity: i32,
    pub purchase_date: NaiveDateTime,
}
