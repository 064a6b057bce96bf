use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::session::machine::{Phase, Session, SessionError, SessionView};

/// In-process session table. Nothing is persisted; idle sessions are swept
/// by [`spawn_sweeper`].
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionView {
        let session = Session::new(Uuid::new_v4());
        let view = session.view();
        self.sessions.write().await.insert(session.id, session);
        debug!(session_id = %view.id, "Session created");
        view
    }

    /// Runs `f` against a read-only session.
    pub async fn read<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&Session) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        f(session)
    }

    /// Applies a transition under the write lock. The closure must not await.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        f(session)
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, SessionError> {
        self.read(id, |s| Ok(s.view())).await
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound(id))
    }

    /// Drops sessions not touched since `cutoff`. Sessions mid-analysis are kept.
    pub async fn evict_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at > cutoff || s.phase() == Phase::Analyzing);
        before - sessions.len()
    }

    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let cutoff = chrono::Duration::from_std(max_idle)
            .ok()
            .and_then(|d| Utc::now().checked_sub_signed(d))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.evict_before(cutoff).await
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Evicts sessions idle for longer than `ttl`, checking every `every`.
pub fn spawn_sweeper(store: SessionStore, ttl: Duration, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(ttl).await;
            if evicted > 0 {
                let remaining = store.len().await;
                info!(evicted, remaining, "Swept idle sessions");
            }
        }
    })
}
