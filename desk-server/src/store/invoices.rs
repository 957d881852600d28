//! Invoice Repository

use super::Table;
use chrono::{Datelike, Utc};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate};

/// Invoices plus the invoice-number sequence, guarded together
#[derive(Default)]
pub struct InvoiceRepository {
    table: Table<Invoice, u64>,
}

/// `INV-<year>-<seq>`, seq zero-padded to three digits
pub fn format_invoice_number(year: i32, seq: u64) -> String {
    format!("INV-{}-{:03}", year, seq)
}

impl InvoiceRepository {
    /// All invoices, newest first
    pub fn find_all(&self) -> Vec<Invoice> {
        self.table.all()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Invoice> {
        self.table.get(id)
    }

    /// Invoices referencing `client_id`, newest first. The reference is not
    /// checked, so an unknown client simply has none.
    pub fn find_by_client(&self, client_id: u64) -> Vec<Invoice> {
        self.table.filter(|inv| inv.client_id == client_id)
    }

    pub fn create(&self, data: InvoiceCreate) -> Invoice {
        let invoice = self.table.insert_with(|id, seq| {
            *seq += 1;
            let created_at = Utc::now();
            let number = format_invoice_number(created_at.year(), *seq);
            data.into_invoice(id, number, created_at)
        });
        tracing::debug!(
            invoice_id = invoice.id,
            invoice_number = %invoice.invoice_number,
            "Invoice created"
        );
        invoice
    }

    /// Merge `data` onto the stored invoice; `None` if absent
    pub fn update(&self, id: u64, data: InvoiceUpdate) -> Option<Invoice> {
        let invoice = self.table.update(id, |invoice| data.apply_to(invoice))?;
        tracing::debug!(invoice_id = id, "Invoice updated");
        Some(invoice)
    }

    pub fn delete(&self, id: u64) -> bool {
        let removed = self.table.remove(id);
        if removed {
            tracing::debug!(invoice_id = id, "Invoice deleted");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    /// Run `f` over every invoice under one read lock
    pub fn scan<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &Invoice>) -> R) -> R {
        self.table.scan(f)
    }
}
