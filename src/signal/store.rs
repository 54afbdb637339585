//! In-memory signal store.

use crate::types::{Signal, SignalStatus};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Append-only store of generated signals with a most-recent-N view.
///
/// Signals are never deleted; retention is purely a query-side cap.
/// Status is the only field mutated after insertion, and only through
/// [`SignalStore::update_status`].
pub struct SignalStore {
    signals: DashMap<Uuid, Signal>,
}

impl SignalStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            signals: DashMap::new(),
        })
    }

    /// Append a freshly normalized signal.
    pub fn add(&self, signal: Signal) {
        self.signals.insert(signal.id, signal);
    }

    /// The most recent `limit` signals, newest first.
    ///
    /// Timestamps are RFC 3339, so lexicographic order matches
    /// chronological order.
    pub fn recent(&self, limit: usize) -> Vec<Signal> {
        let mut all: Vec<Signal> = self.signals.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        all.truncate(limit);
        all
    }

    pub fn get(&self, id: Uuid) -> Option<Signal> {
        self.signals.get(&id).map(|e| e.value().clone())
    }

    /// External status-mutation path (position tracking). Transitions
    /// are not validated here.
    pub fn update_status(&self, id: Uuid, status: SignalStatus) -> bool {
        match self.signals.get_mut(&id) {
            Some(mut entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
