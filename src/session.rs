//! Browser-session scoped key/value storage.
//!
//! Each browser gets a random session id in a cookie without an expiry, so
//! the session ends when the browser session does. Server side, a session
//! is a small map of string slots plus an optional "hold" deadline used to
//! keep the try-on screen behind the processing delay.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use base64::prelude::*;
use chrono::{DateTime, Utc};
use rand::RngCore;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "tryon_session";

/// Slot holding the captured image payload.
pub const CAPTURED_IMAGE_KEY: &str = "capturedImage";

const SESSION_ID_LEN: usize = 22;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a fresh id: 16 random bytes as url-safe base64.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(BASE64_URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Accepts a cookie value only if it has the shape of a generated id.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == SESSION_ID_LEN
            && raw.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
struct Session {
    slots: HashMap<String, String>,
    hold_until: Option<Instant>,
    last_seen: Instant,
    created_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
            hold_until: None,
            last_seen: Instant::now(),
            created_at: Utc::now(),
        }
    }
}

/// Result of [`SessionStore::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedSession {
    pub id: SessionId,
    /// The id was minted for this request and must be sent back as a cookie.
    pub created: bool,
}

/// Shared store of all live sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes the session named by the cookie, or starts a new one.
    ///
    /// Ids the store does not know (expired, or made up by the client) are
    /// never adopted; a fresh id is minted instead.
    pub async fn open(&self, presented: Option<SessionId>) -> OpenedSession {
        let mut sessions = self.sessions.lock().await;

        if let Some(id) = presented {
            if let Some(session) = sessions.get_mut(&id) {
                session.last_seen = Instant::now();
                return OpenedSession { id, created: false };
            }
        }

        let id = SessionId::generate();
        sessions.insert(id.clone(), Session::new());
        debug!(sessions = sessions.len(), "started new session");
        OpenedSession { id, created: true }
    }

    /// Writes `value` into the named slot, replacing any previous value.
    pub async fn set_item(&self, id: &SessionId, key: &str, value: String) {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.entry(id.clone()).or_insert_with(Session::new);
        session.slots.insert(key.to_string(), value);
        session.last_seen = Instant::now();
    }

    pub async fn get_item(&self, id: &SessionId, key: &str) -> Option<String> {
        let sessions = self.sessions.lock().await;
        sessions.get(id).and_then(|s| s.slots.get(key)).cloned()
    }

    /// Holds the session back until `deadline`; see [`Self::remaining_hold`].
    pub async fn hold_until(&self, id: &SessionId, deadline: Instant) {
        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get_mut(id) {
            session.hold_until = Some(deadline);
        }
    }

    /// Time left before the session's hold elapses, `None` once it has.
    pub async fn remaining_hold(&self, id: &SessionId) -> Option<Duration> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(id)?;
        let deadline = session.hold_until?;

        let now = Instant::now();
        if now >= deadline {
            session.hold_until = None;
            None
        } else {
            Some(deadline - now)
        }
    }

    /// Drops every session not seen for at least `idle`, returning how many.
    pub async fn evict_idle(&self, idle: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|id, session| {
            let keep = now.duration_since(session.last_seen) < idle;
            if !keep {
                debug!(session = id.as_str(), created_at = %session.created_at, "evicting idle session");
            }
            keep
        });
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Spawns a task that evicts idle sessions every `every`.
    pub fn spawn_janitor(&self, idle: Duration, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                let evicted = store.evict_idle(idle).await;
                if evicted > 0 {
                    info!(evicted, "evicted idle sessions");
                }
            }
        })
    }
}
