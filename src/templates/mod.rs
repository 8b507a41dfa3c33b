//! HTML rendering of the listing page.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::db::models::Medicine;
use crate::services::aggregate::{PurchaseGroup, PurchasedMedicine};
use crate::utils::{escape_html, format_purchase_date};

/// Everything the listing page shows.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub medicines: Vec<Medicine>,
    pub customer_purchases: Vec<PurchaseSummary>,
}

/// One purchase group, with its date already formatted for display.
#[derive(Debug, Serialize)]
pub struct PurchaseSummary {
    pub purchase_id: i32,
    pub customer_id: i32,
    pub full_name: String,
    pub medicines: Vec<PurchasedMedicine>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_cost: Decimal,
    pub purchase_date: String,
}

impl From<PurchaseGroup> for PurchaseSummary {
    fn from(group: PurchaseGroup) -> Self {
        Self {
            purchase_id: group.purchase_id,
            customer_id: group.customer_id,
            full_name: group.full_name,
            medicines: group.medicines,
            total_cost: group.total_cost,
            purchase_date: format_purchase_date(group.purchase_date),
        }
    }
}

pub fn render_index(view: &IndexView) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Pharmacy</title>\n</head>\n<body>\n<h1>Medicines</h1>\n",
    );

    if view.medicines.is_empty() {
        page.push_str("<p>No medicines found.</p>\n");
    } else {
        page.push_str("<table>\n<tr><th>ID</th><th>Name</th><th>Cost</th></tr>\n");
        for medicine in &view.medicines {
            let _ = writeln!(
                page,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                medicine.medicine_id,
                escape_html(&medicine.medicine_name),
                medicine.medicine_cost
            );
        }
        page.push_str("</table>\n");
    }

    page.push_str("<h1>Customer purchases</h1>\n");
    if view.customer_purchases.is_empty() {
        page.push_str("<p>No purchases yet.</p>\n");
    }
    for purchase in &view.customer_purchases {
        render_purchase(&mut page, purchase);
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_purchase(page: &mut String, purchase: &PurchaseSummary) {
    let _ = writeln!(
        page,
        "<section class=\"purchase\">\n<h2>{} (customer {}, purchase {})</h2>\n<p>{}</p>\n<ul>",
        escape_html(&purchase.full_name),
        purchase.customer_id,
        purchase.purchase_id,
        escape_html(&purchase.purchase_date)
    );
    for medicine in &purchase.medicines {
        let _ = writeln!(
            page,
            "<li>{} &times; {} @ {}</li>",
            escape_html(&medicine.medicine_name),
            medicine.quantity,
            medicine.medicine_cost
        );
    }
    let _ = writeln!(
        page,
        "</ul>\n<p>Total: {}</p>\n\
         <form method=\"post\" action=\"/send_to_billing/{}\">\
         <button type=\"submit\">Send to billing</button></form>\n</section>",
        purchase.total_cost, purchase.customer_id
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::aggregate::aggregate;
    use crate::services::aggregate::tests::{at, line};

    #[test]
    fn summary_formats_date_and_keeps_totals() {
        let group = aggregate(vec![
            line(1, 5, 10, Decimal::new(250, 2), 3, at(5, 14)),
            line(1, 5, 11, Decimal::new(100, 2), 2, at(5, 14)),
        ])
        .remove(0);

        let summary = PurchaseSummary::from(group);

        assert_eq!(summary.purchase_date, "March 05, 2024 - 14:30");
        assert_eq!(summary.total_cost, Decimal::new(950, 2));
        assert_eq!(summary.medicines.len(), 2);
    }

    #[test]
    fn renders_medicines_and_billing_forms() {
        let mut group = aggregate(vec![line(1, 5, 10, Decimal::new(250, 2), 3, at(5, 14))]);
        group[0].full_name = "Ada <Admin>".to_string();
        let view = IndexView {
            medicines: vec![Medicine {
                medicine_id: 10,
                medicine_name: "Aspirin".to_string(),
                medicine_cost: Decimal::new(250, 2),
            }],
            customer_purchases: group.into_iter().map(PurchaseSummary::from).collect(),
        };

        let html = render_index(&view);

        assert!(html.contains("<td>Aspirin</td><td>2.50</td>"));
        assert!(html.contains("action=\"/send_to_billing/5\""));
        assert!(html.contains("Ada &lt;Admin&gt;"));
        assert!(html.contains("Total: 7.50"));
        assert!(!html.contains("<Admin>"));
    }

    #[test]
    fn renders_empty_page() {
        let html = render_index(&IndexView {
            medicines: Vec::new(),
            customer_purchases: Vec::new(),
        });
        assert!(html.contains("No medicines found."));
        assert!(html.contains("No purchases yet."));
    }
}
