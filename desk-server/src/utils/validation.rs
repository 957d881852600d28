//! Request body validation
//!
//! [`ValidJson`] decodes a JSON body and runs its `validator` rules, turning
//! both decode and rule failures into a 400 with per-field detail under
//! `details.errors`.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::auth::{LoginRequest, RegisterRequest};
use shared::models::{
    ClientCreate, ClientUpdate, EnquiryCreate, EnquiryUpdate, InvoiceCreate, InvoiceUpdate,
};
use shared::{AppError, FieldError};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// A request body with a fixed rejection message
pub trait Payload: DeserializeOwned + Validate {
    /// Top-level message of the 400 response
    const INVALID_MESSAGE: &'static str;
}

macro_rules! payload {
    ($message:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Payload for $ty {
                const INVALID_MESSAGE: &'static str = $message;
            }
        )+
    };
}

payload!("Invalid client data" => ClientCreate, ClientUpdate);
payload!("Invalid invoice data" => InvoiceCreate, InvoiceUpdate);
payload!("Invalid enquiry data" => EnquiryCreate, EnquiryUpdate);
payload!("Invalid user data" => RegisterRequest);
payload!("Invalid login data" => LoginRequest);

/// JSON body that has passed validation
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: Payload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::invalid_fields(
                T::INVALID_MESSAGE,
                vec![FieldError::body(rejection.body_text())],
            )
        })?;

        payload
            .validate()
            .map_err(|errors| AppError::invalid_fields(T::INVALID_MESSAGE, flatten_errors(&errors)))?;

        Ok(Self(payload))
    }
}

/// One [`FieldError`] per failing rule, addressed by camelCase JSON path
/// (`items[0].quantity`), sorted by path
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, None, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = camel_case(field);
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name,
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|e| FieldError::new(path.clone(), describe(e))));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("Failed {} check", error.code),
    }
}

/// `client_id` -> `clientId`
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().filter_map(|e| e.field.as_deref()).collect()
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("client_id"), "clientId");
        assert_eq!(camel_case("issue_date"), "issueDate");
        assert_eq!(camel_case("name"), "name");
    }

    #[test]
    fn test_flatten_reports_every_field() {
        let payload: ClientCreate =
            serde_json::from_str(r#"{"name":"","email":"not-an-email"}"#).unwrap();
        let errors = flatten_errors(&payload.validate().unwrap_err());
        assert_eq!(fields(&errors), vec!["email", "name"]);
        assert_eq!(errors[0].message, "Invalid email");
        assert_eq!(errors[1].message, "Name is required");
    }

    #[test]
    fn test_flatten_nested_item_paths() {
        let payload: InvoiceCreate = serde_json::from_value(serde_json::json!({
            "clientId": 1,
            "issueDate": "2026-01-01T00:00:00Z",
            "dueDate": "2026-02-01T00:00:00Z",
            "status": "draft",
            "subtotal": "10",
            "tax": "0",
            "total": "10",
            "items": [
                { "description": "ok", "quantity": 1, "rate": 10, "amount": 10 },
                { "description": "", "quantity": 0, "rate": 10, "amount": 10 }
            ]
        }))
        .unwrap();
        let errors = flatten_errors(&payload.validate().unwrap_err());
        assert_eq!(
            fields(&errors),
            vec!["items[1].description", "items[1].quantity"]
        );
    }

    #[test]
    fn test_empty_items_rejected() {
        let payload: InvoiceCreate = serde_json::from_value(serde_json::json!({
            "clientId": 1,
            "issueDate": "2026-01-01T00:00:00Z",
            "dueDate": "2026-02-01T00:00:00Z",
            "status": "sent",
            "subtotal": "0",
            "tax": "0",
            "total": "0",
            "items": []
        }))
        .unwrap();
        let errors = flatten_errors(&payload.validate().unwrap_err());
        assert_eq!(fields(&errors), vec!["items"]);
        assert_eq!(errors[0].message, "At least one item is required");
    }

    #[test]
    fn test_register_rules() {
        let payload: RegisterRequest = serde_json::from_value(serde_json::json!({
            "username": "ab",
            "password": "12345",
            "email": "a@example.com",
            "name": "A"
        }))
        .unwrap();
        let errors = flatten_errors(&payload.validate().unwrap_err());
        assert_eq!(fields(&errors), vec!["password", "username"]);
    }
}
