//! Typed API client

use shared::auth::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UserInfo};
use shared::models::{
    Client, ClientCreate, ClientUpdate, Enquiry, EnquiryCreate, EnquiryUpdate, HealthResponse,
    Invoice, InvoiceCreate, InvoiceUpdate, Stats,
};

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Client for the desk API
///
/// Holds the bearer token issued by [`login`](Self::login) or
/// [`register`](Self::register). Tokens cannot be revoked server-side, so
/// [`logout`](Self::logout) only forgets it.
#[derive(Debug, Clone)]
pub struct DeskClient<C: HttpClient = NetworkHttpClient> {
    http: C,
}

impl DeskClient<NetworkHttpClient> {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(&config)?,
        })
    }
}

impl<C: HttpClient> DeskClient<C> {
    /// Wrap a custom transport
    pub fn with_transport(http: C) -> Self {
        Self { http }
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    // ========== Auth ==========

    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.http.post("/api/auth/login", &req).await?;
        self.http.set_token(Some(resp.token.clone()));
        tracing::debug!(user_id = resp.user.id, "Logged in");
        Ok(resp)
    }

    pub async fn register(&mut self, req: &RegisterRequest) -> ClientResult<AuthResponse> {
        let resp: AuthResponse = self.http.post("/api/auth/register", req).await?;
        self.http.set_token(Some(resp.token.clone()));
        tracing::debug!(user_id = resp.user.id, "Registered");
        Ok(resp)
    }

    pub async fn profile(&self) -> ClientResult<UserInfo> {
        let resp: ProfileResponse = self.http.get("/api/auth/profile").await?;
        Ok(resp.user)
    }

    /// Forget the token
    pub fn logout(&mut self) {
        self.http.set_token(None);
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.http.get("/api/health").await
    }

    // ========== Clients ==========

    pub async fn list_clients(&self) -> ClientResult<Vec<Client>> {
        self.http.get("/api/clients").await
    }

    pub async fn get_client(&self, id: u64) -> ClientResult<Client> {
        self.http.get(&format!("/api/clients/{}", id)).await
    }

    pub async fn create_client(&self, data: &ClientCreate) -> ClientResult<Client> {
        self.http.post("/api/clients", data).await
    }

    pub async fn update_client(&self, id: u64, data: &ClientUpdate) -> ClientResult<Client> {
        self.http.put(&format!("/api/clients/{}", id), data).await
    }

    pub async fn delete_client(&self, id: u64) -> ClientResult<()> {
        self.http.delete(&format!("/api/clients/{}", id)).await
    }

    /// Invoices referencing the client, newest first
    pub async fn invoices_for_client(&self, id: u64) -> ClientResult<Vec<Invoice>> {
        self.http.get(&format!("/api/clients/{}/invoices", id)).await
    }

    // ========== Invoices ==========

    pub async fn list_invoices(&self) -> ClientResult<Vec<Invoice>> {
        self.http.get("/api/invoices").await
    }

    pub async fn get_invoice(&self, id: u64) -> ClientResult<Invoice> {
        self.http.get(&format!("/api/invoices/{}", id)).await
    }

    pub async fn create_invoice(&self, data: &InvoiceCreate) -> ClientResult<Invoice> {
        self.http.post("/api/invoices", data).await
    }

    pub async fn update_invoice(&self, id: u64, data: &InvoiceUpdate) -> ClientResult<Invoice> {
        self.http.put(&format!("/api/invoices/{}", id), data).await
    }

    pub async fn delete_invoice(&self, id: u64) -> ClientResult<()> {
        self.http.delete(&format!("/api/invoices/{}", id)).await
    }

    // ========== Enquiries ==========

    pub async fn list_enquiries(&self) -> ClientResult<Vec<Enquiry>> {
        self.http.get("/api/enquiries").await
    }

    pub async fn get_enquiry(&self, id: u64) -> ClientResult<Enquiry> {
        self.http.get(&format!("/api/enquiries/{}", id)).await
    }

    pub async fn create_enquiry(&self, data: &EnquiryCreate) -> ClientResult<Enquiry> {
        self.http.post("/api/enquiries", data).await
    }

    pub async fn update_enquiry(&self, id: u64, data: &EnquiryUpdate) -> ClientResult<Enquiry> {
        self.http.put(&format!("/api/enquiries/{}", id), data).await
    }

    pub async fn delete_enquiry(&self, id: u64) -> ClientResult<()> {
        self.http.delete(&format!("/api/enquiries/{}", id)).await
    }

    // ========== Dashboard ==========

    pub async fn stats(&self) -> ClientResult<Stats> {
        self.http.get("/api/stats").await
    }
}
