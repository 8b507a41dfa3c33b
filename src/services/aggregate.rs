use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::models::PurchaseLine;

/// Identifies one invoice: the lines a customer bought under one purchase id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PurchaseKey {
    pub customer_id: i32,
    pub purchase_id: i32,
}

impl From<&PurchaseLine> for PurchaseKey {
    fn from(line: &PurchaseLine) -> Self {
        Self {
            customer_id: line.customer_id,
            purchase_id: line.purchase_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchasedMedicine {
    pub medicine_id: i32,
    pub medicine_name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub medicine_cost: Decimal,
    pub quantity: i32,
}

impl PurchasedMedicine {
    pub fn line_total(&self) -> Decimal {
        self.medicine_cost * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseGroup {
    pub customer_id: i32,
    pub purchase_id: i32,
    pub full_name: String,
    pub purchase_date: NaiveDateTime,
    pub medicines: Vec<PurchasedMedicine>,
    pub total_cost: Decimal,
}

impl PurchaseGroup {
    fn open(line: &PurchaseLine) -> Self {
        Self {
            customer_id: line.customer_id,
            purchase_id: line.purchase_id,
            full_name: line.full_name.clone(),
            purchase_date: line.purchase_date,
            medicines: Vec::new(),
            total_cost: Decimal::ZERO,
        }
    }

    fn push(&mut self, line: PurchaseLine) {
        let medicine = PurchasedMedicine {
            medicine_id: line.medicine_id,
            medicine_name: line.medicine_name,
            medicine_cost: line.medicine_cost,
            quantity: line.quantity,
        };
        self.total_cost += medicine.line_total();
        self.medicines.push(medicine);
    }
}

/// Groups purchase lines by customer and purchase id.
///
/// Groups come out in the order their first line was seen and keep their
/// lines in input order. Two lines for the same medicine in one purchase stay
/// separate entries. A group takes the `purchase_date` of its first line.
pub fn aggregate<I>(lines: I) -> Vec<PurchaseGroup>
where
    I: IntoIterator<Item = PurchaseLine>,
{
    let mut index: HashMap<PurchaseKey, usize> = HashMap::new();
    let mut groups: Vec<PurchaseGroup> = Vec::new();

    for line in lines {
        let key = PurchaseKey::from(&line);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(PurchaseGroup::open(&line));
            groups.len() - 1
        });
        groups[slot].push(line);
    }

    groups
}

/// Most recent purchase first. The sort is stable, so groups with the same
/// date keep their relative order.
pub fn sort_for_display(groups: &mut [PurchaseGroup]) {
    groups.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
}

/// Number of medicine lines across all groups.
pub fn line_count(groups: &[PurchaseGroup]) -> usize {
    groups.iter().map(|group| group.medicines.len()).sum()
}
