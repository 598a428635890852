//! Per-session dashboard models.
//!
//! Requests of one browser session may be handled concurrently by different
//! workers. Each model sits behind a single mutex which is only held while a
//! model is read or replaced, never across a backend call.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info};
use uuid::Uuid;

use crate::dashboard::{DashboardEvent, DashboardModel, RequestToken};
use crate::domain::client::ClientRecord;
use crate::domain::selection::Selection;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Result of completing a client-list fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued in the meantime; the response was dropped.
    Superseded,
}

struct SessionEntry {
    model: DashboardModel,
    last_seen: Instant,
}

pub struct DashboardStore {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}

impl DashboardStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    // Models are swapped whole, so a poisoned lock never exposes a half-applied event.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a fresh model and drops sessions idle for longer than the timeout.
    pub fn create(&self) -> Uuid {
        let now = Instant::now();
        let id = Uuid::new_v4();
        let mut sessions = self.lock();

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle dashboard sessions");
        }

        sessions.insert(
            id,
            SessionEntry {
                model: DashboardModel::new(),
                last_seen: now,
            },
        );
        debug!("Created dashboard session {id}");
        id
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self, id: &Uuid) -> Option<DashboardModel> {
        let mut sessions = self.lock();
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.model.clone())
    }

    /// Applies `event` to the session model and returns the new snapshot.
    pub fn dispatch(&self, id: &Uuid, event: DashboardEvent) -> Option<DashboardModel> {
        let mut sessions = self.lock();
        let entry = sessions.get_mut(id)?;
        let current = std::mem::take(&mut entry.model);
        entry.model = current.reduce(event);
        entry.last_seen = Instant::now();
        Some(entry.model.clone())
    }

    /// Issues the next request token for a client-list fetch.
    pub fn begin_client_fetch(&self, id: &Uuid) -> Option<RequestToken> {
        let mut sessions = self.lock();
        let entry = sessions.get_mut(id)?;
        let token = entry.model.latest_request().next();
        let current = std::mem::take(&mut entry.model);
        entry.model = current.reduce(DashboardEvent::ClientsRequested(token));
        entry.last_seen = Instant::now();
        Some(token)
    }

    /// Applies a successful response unless a newer fetch superseded it.
    pub fn complete_client_fetch(
        &self,
        id: &Uuid,
        token: RequestToken,
        selection: Selection,
        clients: Vec<ClientRecord>,
    ) -> Option<FetchOutcome> {
        let mut sessions = self.lock();
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();

        if !entry.model.is_current(token) {
            debug!(
                "Discarding stale client list #{} for session {id}, latest is #{}",
                token.get(),
                entry.model.latest_request().get()
            );
            return Some(FetchOutcome::Superseded);
        }

        let current = std::mem::take(&mut entry.model);
        entry.model = current.reduce(DashboardEvent::ClientsLoaded {
            token,
            selection,
            clients,
        });
        Some(FetchOutcome::Applied)
    }
}
