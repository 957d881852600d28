//! Enquiry Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::serde_helpers::{double_option, non_blank};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

/// Customer enquiry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    pub priority: EnquiryPriority,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Create enquiry payload; `priority` defaults to medium, `status` to open
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryCreate {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
    #[serde(default)]
    pub priority: EnquiryPriority,
    #[serde(default)]
    pub status: EnquiryStatus,
}

impl EnquiryCreate {
    pub fn into_enquiry(self, id: u64, created_at: DateTime<Utc>) -> Enquiry {
        Enquiry {
            id,
            name: self.name,
            email: self.email,
            phone: non_blank(self.phone),
            company: non_blank(self.company),
            subject: self.subject,
            message: self.message,
            priority: self.priority,
            status: self.status,
            created_at,
        }
    }
}

/// Update enquiry payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub company: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<EnquiryPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EnquiryStatus>,
}

impl EnquiryUpdate {
    /// Merge onto `enquiry`; fields present in the patch win
    pub fn apply_to(self, enquiry: &mut Enquiry) {
        if let Some(name) = self.name {
            enquiry.name = name;
        }
        if let Some(email) = self.email {
            enquiry.email = email;
        }
        if let Some(phone) = self.phone {
            enquiry.phone = non_blank(phone);
        }
        if let Some(company) = self.company {
            enquiry.company = non_blank(company);
        }
        if let Some(subject) = self.subject {
            enquiry.subject = subject;
        }
        if let Some(message) = self.message {
            enquiry.message = message;
        }
        if let Some(priority) = self.priority {
            enquiry.priority = priority;
        }
        if let Some(status) = self.status {
            enquiry.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_create() {
        let payload: EnquiryCreate = serde_json::from_str(
            r#"{"name":"Jo","email":"jo@example.test","subject":"Quote","message":"Need a quote"}"#,
        )
        .unwrap();
        assert_eq!(payload.priority, EnquiryPriority::Medium);
        assert_eq!(payload.status, EnquiryStatus::Open);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&EnquiryStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let p: EnquiryPriority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(p, EnquiryPriority::Urgent);
    }

    #[test]
    fn test_patch_status_only() {
        let mut enquiry = EnquiryCreate {
            name: "Jo".into(),
            email: "jo@example.test".into(),
            phone: Some("555".into()),
            company: None,
            subject: "Quote".into(),
            message: "Need a quote".into(),
            priority: EnquiryPriority::High,
            status: EnquiryStatus::Open,
        }
        .into_enquiry(1, Utc::now());

        let patch: EnquiryUpdate = serde_json::from_str(r#"{"status":"closed"}"#).unwrap();
        patch.apply_to(&mut enquiry);
        assert_eq!(enquiry.status, EnquiryStatus::Closed);
        assert_eq!(enquiry.priority, EnquiryPriority::High);
        assert_eq!(enquiry.phone.as_deref(), Some("555"));
    }

    #[test]
    fn test_patch_blank_optionals_become_null() {
        let mut enquiry = EnquiryCreate {
            name: "Jo".into(),
            email: "jo@example.test".into(),
            phone: Some("555".into()),
            company: Some("Initech".into()),
            subject: "Quote".into(),
            message: "Need a quote".into(),
            priority: EnquiryPriority::Low,
            status: EnquiryStatus::Open,
        }
        .into_enquiry(1, Utc::now());

        let patch: EnquiryUpdate = serde_json::from_str(r#"{"phone":"","company":" "}"#).unwrap();
        patch.apply_to(&mut enquiry);
        assert_eq!(enquiry.phone, None);
        assert_eq!(enquiry.company, None);
    }
}
