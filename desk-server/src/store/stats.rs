//! Dashboard statistics, computed by full scan on every call

use super::Store;
use crate::utils::{AppError, AppResult};
use rust_decimal::Decimal;
use shared::models::{EnquiryStatus, InvoiceStatus, Stats};

impl Store {
    /// Aggregate dashboard figures
    ///
    /// - `totalRevenue`: sum of `total` over paid invoices
    /// - `pendingInvoices`: invoices that are sent or overdue
    /// - `activeClients`: every client
    /// - `openEnquiries`: enquiries still open
    ///
    /// Fails with an internal error when the revenue sum leaves the
    /// `Decimal` range.
    pub fn stats(&self) -> AppResult<Stats> {
        let (total_revenue, pending_invoices) = self.invoices().scan(|mut invoices| {
            Iterator::try_fold(&mut invoices, (Decimal::ZERO, 0usize), |(revenue, pending), inv| {
                match inv.status {
                    InvoiceStatus::Paid => revenue
                        .checked_add(inv.total)
                        .map(|revenue| (revenue, pending))
                        .ok_or_else(|| AppError::internal("Total revenue overflowed")),
                    status if status.is_pending() => Ok((revenue, pending + 1)),
                    _ => Ok((revenue, pending)),
                }
            })
        })?;

        let open_enquiries = self
            .enquiries()
            .scan(|enquiries| enquiries.filter(|e| e.status == EnquiryStatus::Open).count());

        Ok(Stats {
            total_revenue,
            pending_invoices,
            active_clients: self.clients().count(),
            open_enquiries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ClientCreate, EnquiryCreate, InvoiceCreate};

    fn invoice(status: &str, total: &str) -> InvoiceCreate {
        serde_json::from_value(serde_json::json!({
            "clientId": 1,
            "issueDate": "2026-03-01T00:00:00Z",
            "dueDate": "2026-03-31T00:00:00Z",
            "status": status,
            "subtotal": total,
            "tax": "0",
            "total": total,
            "items": [{ "description": "Work", "quantity": 1, "rate": 1, "amount": 1 }]
        }))
        .unwrap()
    }

    fn enquiry(status: &str) -> EnquiryCreate {
        serde_json::from_value(serde_json::json!({
            "name": "Eve",
            "email": "eve@example.com",
            "subject": "Hello",
            "message": "Hi",
            "status": status
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = Store::new();
        assert_eq!(store.stats().unwrap(), Stats::default());
    }

    #[test]
    fn test_stats_example() {
        let store = Store::new();
        store.invoices().create(invoice("paid", "100.50"));
        store.invoices().create(invoice("paid", "200"));
        store.invoices().create(invoice("sent", "50"));
        store.invoices().create(invoice("overdue", "75"));
        store.invoices().create(invoice("draft", "500"));

        store.clients().create(ClientCreate {
            name: "Acme".into(),
            email: "acme@example.com".into(),
            phone: None,
            address: None,
            company: None,
        });

        store.enquiries().create(enquiry("open"));
        store.enquiries().create(enquiry("open"));
        store.enquiries().create(enquiry("in_progress"));
        store.enquiries().create(enquiry("closed"));

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_revenue, "300.50".parse::<Decimal>().unwrap());
        assert_eq!(stats.pending_invoices, 2);
        assert_eq!(stats.active_clients, 1);
        assert_eq!(stats.open_enquiries, 2);
    }

    #[test]
    fn test_revenue_follows_status_changes() {
        let store = Store::new();
        let inv = store.invoices().create(invoice("sent", "80"));
        assert_eq!(store.stats().unwrap().total_revenue, Decimal::ZERO);
        assert_eq!(store.stats().unwrap().pending_invoices, 1);

        let patch = serde_json::from_str(r#"{"status":"paid"}"#).unwrap();
        store.invoices().update(inv.id, patch).unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.total_revenue, Decimal::from(80));
        assert_eq!(stats.pending_invoices, 0);
    }

    #[test]
    fn test_revenue_overflow_is_an_error() {
        let store = Store::new();
        let max = Decimal::MAX.to_string();
        store.invoices().create(invoice("paid", &max));
        store.invoices().create(invoice("paid", &max));

        let err = store.stats().unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::InternalError);
    }
}
