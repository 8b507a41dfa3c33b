pub mod aggregate;
pub mod billing;
pub mod fms;

pub use billing::{forward_customer, BillingSink};
pub use fms::FmsClient;
