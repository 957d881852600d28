//! Client Repository

use super::Table;
use chrono::Utc;
use shared::models::{Client, ClientCreate, ClientUpdate};

#[derive(Default)]
pub struct ClientRepository {
    table: Table<Client>,
}

impl ClientRepository {
    /// All clients, newest first
    pub fn find_all(&self) -> Vec<Client> {
        self.table.all()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Client> {
        self.table.get(id)
    }

    pub fn create(&self, data: ClientCreate) -> Client {
        let client = self
            .table
            .insert_with(|id, _| data.into_client(id, Utc::now()));
        tracing::debug!(client_id = client.id, "Client created");
        client
    }

    /// Merge `data` onto the stored client; `None` if absent
    pub fn update(&self, id: u64, data: ClientUpdate) -> Option<Client> {
        let client = self.table.update(id, |client| data.apply_to(client))?;
        tracing::debug!(client_id = id, "Client updated");
        Some(client)
    }

    pub fn delete(&self, id: u64) -> bool {
        let removed = self.table.remove(id);
        if removed {
            tracing::debug!(client_id = id, "Client deleted");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }
}
