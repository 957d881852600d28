//! Record Store
//!
//! Sole source of truth for users, clients, invoices and enquiries. Each
//! entity lives in its own [`Table`] behind its own lock; nothing persists
//! past the process.

pub mod clients;
pub mod enquiries;
pub mod invoices;
pub mod stats;
pub mod table;
pub mod users;

pub use clients::ClientRepository;
pub use enquiries::EnquiryRepository;
pub use invoices::InvoiceRepository;
pub use table::Table;
pub use users::{NewUser, User, UserRepository};

use chrono::{DateTime, Utc};
use shared::AppError;
use shared::models::{Client, Enquiry, Invoice};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    #[error("Email already exists: {0}")]
    EmailTaken(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken(_) => AppError::username_exists(),
            StoreError::EmailTaken(_) => AppError::email_exists(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A row with a sequential id and a creation time
pub trait Record: Clone {
    fn id(&self) -> u64;
    fn created_at(&self) -> DateTime<Utc>;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> u64 {
                    self.id
                }
                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }
            }
        )*
    };
}

impl_record!(User, Client, Invoice, Enquiry);

/// All tables of the application
#[derive(Default)]
pub struct Store {
    users: UserRepository,
    clients: ClientRepository,
    invoices: InvoiceRepository,
    enquiries: EnquiryRepository,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn clients(&self) -> &ClientRepository {
        &self.clients
    }

    pub fn invoices(&self) -> &InvoiceRepository {
        &self.invoices
    }

    pub fn enquiries(&self) -> &EnquiryRepository {
        &self.enquiries
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("users", &self.users.count())
            .field("clients", &self.clients.count())
            .field("invoices", &self.invoices.count())
            .field("enquiries", &self.enquiries.count())
            .finish()
    }
}
