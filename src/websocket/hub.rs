use crate::types::ServerMessage;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Registry of connected dashboard clients.
///
/// The dashboard is broadcast-only: every client sees every message, so
/// there is no per-asset room bookkeeping.
pub struct ClientHub {
    clients: DashMap<Uuid, mpsc::UnboundedSender<String>>,
}

impl ClientHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            clients: DashMap::new(),
        })
    }

    /// Register a new client, returning its id.
    pub fn register(&self, tx: mpsc::UnboundedSender<String>) -> Uuid {
        let client_id = Uuid::new_v4();
        self.clients.insert(client_id, tx);
        client_id
    }

    pub fn unregister(&self, client_id: Uuid) {
        self.clients.remove(&client_id);
    }

    /// Send a message to one client. Returns false if it is gone.
    pub fn send_to(&self, client_id: Uuid, message: &ServerMessage) -> bool {
        let Ok(json) = serde_json::to_string(message) else {
            return false;
        };
        match self.clients.get(&client_id) {
            Some(tx) => tx.send(json).is_ok(),
            None => false,
        }
    }

    /// Broadcast a message to every connected client.
    pub fn broadcast(&self, message: &ServerMessage) {
        let Ok(json) = serde_json::to_string(message) else {
            return;
        };
        for client in self.clients.iter() {
            let _ = client.value().send(json.clone());
        }
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}
