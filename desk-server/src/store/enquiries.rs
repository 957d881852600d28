//! Enquiry Repository

use super::Table;
use chrono::Utc;
use shared::models::{Enquiry, EnquiryCreate, EnquiryUpdate};

#[derive(Default)]
pub struct EnquiryRepository {
    table: Table<Enquiry>,
}

impl EnquiryRepository {
    /// All enquiries, newest first
    pub fn find_all(&self) -> Vec<Enquiry> {
        self.table.all()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Enquiry> {
        self.table.get(id)
    }

    pub fn create(&self, data: EnquiryCreate) -> Enquiry {
        let enquiry = self
            .table
            .insert_with(|id, _| data.into_enquiry(id, Utc::now()));
        tracing::debug!(enquiry_id = enquiry.id, "Enquiry created");
        enquiry
    }

    pub fn update(&self, id: u64, data: EnquiryUpdate) -> Option<Enquiry> {
        let enquiry = self.table.update(id, |enquiry| data.apply_to(enquiry))?;
        tracing::debug!(enquiry_id = id, "Enquiry updated");
        Some(enquiry)
    }

    pub fn delete(&self, id: u64) -> bool {
        let removed = self.table.remove(id);
        if removed {
            tracing::debug!(enquiry_id = id, "Enquiry deleted");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    pub fn scan<R>(&self, f: impl FnOnce(&mut dyn Iterator<Item = &Enquiry>) -> R) -> R {
        self.table.scan(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{EnquiryPriority, EnquiryStatus};

    fn create(subject: &str) -> EnquiryCreate {
        serde_json::from_value(serde_json::json!({
            "name": "Dana",
            "email": "dana@example.com",
            "subject": subject,
            "message": "Need a quote"
        }))
        .unwrap()
    }

    #[test]
    fn test_create_applies_defaults() {
        let repo = EnquiryRepository::default();
        let enquiry = repo.create(create("Quote"));
        assert_eq!(enquiry.id, 1);
        assert_eq!(enquiry.priority, EnquiryPriority::Medium);
        assert_eq!(enquiry.status, EnquiryStatus::Open);
        assert!(enquiry.phone.is_none());
    }

    #[test]
    fn test_update_status_only() {
        let repo = EnquiryRepository::default();
        let created = repo.create(create("Quote"));

        let patch: EnquiryUpdate = serde_json::from_str(r#"{"status":"closed"}"#).unwrap();
        let updated = repo.update(created.id, patch).unwrap();
        assert_eq!(updated.status, EnquiryStatus::Closed);
        assert_eq!(updated.subject, "Quote");
        assert_eq!(updated.priority, EnquiryPriority::Medium);
    }

    #[test]
    fn test_delete_missing() {
        let repo = EnquiryRepository::default();
        assert!(!repo.delete(1));
        repo.create(create("Quote"));
        assert!(repo.delete(1));
        assert_eq!(repo.count(), 0);
    }
}
