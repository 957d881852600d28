//! Invoice Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_helpers::{double_option, non_blank};

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Sent or overdue: issued but not yet paid
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }
}

/// Invoice line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InvoiceItem {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1.0, message = "Quantity must be at least 1"))]
    pub quantity: f64,
    #[validate(range(min = 0.0, message = "Rate must be positive"))]
    pub rate: f64,
    #[validate(range(min = 0.0, message = "Amount must be positive"))]
    pub amount: f64,
}

/// Invoice record
///
/// `subtotal`, `tax` and `total` are taken as submitted; nothing here
/// recomputes them from `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: u64,
    pub invoice_number: String,
    /// Soft reference to [`Client::id`](super::Client)
    pub client_id: u64,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
    pub items: Vec<InvoiceItem>,
    pub created_at: DateTime<Utc>,
}

/// Create invoice payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub client_id: u64,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Vec<InvoiceItem>,
}

impl InvoiceCreate {
    pub fn into_invoice(
        self,
        id: u64,
        invoice_number: String,
        created_at: DateTime<Utc>,
    ) -> Invoice {
        Invoice {
            id,
            invoice_number,
            client_id: self.client_id,
            issue_date: self.issue_date,
            due_date: self.due_date,
            status: self.status,
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
            notes: non_blank(self.notes),
            items: self.items,
            created_at,
        }
    }
}

/// Update invoice payload
///
/// `invoiceNumber`, `id` and `createdAt` are not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "At least one item is required"), nested)]
    pub items: Option<Vec<InvoiceItem>>,
}

impl InvoiceUpdate {
    /// Merge onto `invoice`; fields present in the patch win
    pub fn apply_to(self, invoice: &mut Invoice) {
        if let Some(client_id) = self.client_id {
            invoice.client_id = client_id;
        }
        if let Some(issue_date) = self.issue_date {
            invoice.issue_date = issue_date;
        }
        if let Some(due_date) = self.due_date {
            invoice.due_date = due_date;
        }
        if let Some(status) = self.status {
            invoice.status = status;
        }
        if let Some(subtotal) = self.subtotal {
            invoice.subtotal = subtotal;
        }
        if let Some(tax) = self.tax {
            invoice.tax = tax;
        }
        if let Some(total) = self.total {
            invoice.total = total;
        }
        if let Some(notes) = self.notes {
            invoice.notes = non_blank(notes);
        }
        if let Some(items) = self.items {
            invoice.items = items;
        }
    }
}
