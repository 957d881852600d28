//! Dashboard statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Sum of `total` over paid invoices
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Invoices that are sent or overdue
    pub pending_invoices: usize,
    pub active_clients: usize,
    pub open_enquiries: usize,
}
