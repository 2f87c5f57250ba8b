//! Session-scoped context.
//!
//! Each visitor gets a `SessionContext` holding lazily built content and the
//! current page. Renderers receive it explicitly; there is no global registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use uuid::Uuid;

use crate::content::metrics::generate_metrics;
use crate::content::{catalog, MetricSample, Project, SkillRating};
use crate::pages::{Navigator, Page};

pub const SESSION_COOKIE: &str = "portfolio_session";

pub struct SessionContext {
    pub id: Uuid,
    metrics_seed: Option<u64>,
    skills: OnceLock<Vec<SkillRating>>,
    projects: OnceLock<Vec<Project>>,
    metrics: OnceLock<Vec<MetricSample>>,
    navigator: Mutex<Navigator>,
    last_seen: Mutex<Instant>,
}

impl SessionContext {
    pub fn new(id: Uuid, metrics_seed: Option<u64>) -> Self {
        Self {
            id,
            metrics_seed,
            skills: OnceLock::new(),
            projects: OnceLock::new(),
            metrics: OnceLock::new(),
            navigator: Mutex::new(Navigator::default()),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    pub fn skills(&self) -> &[SkillRating] {
        self.skills.get_or_init(catalog::skills)
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.get_or_init(catalog::projects)
    }

    /// Generated on first access and fixed for the rest of the session.
    pub fn metrics(&self) -> &[MetricSample] {
        self.metrics.get_or_init(|| {
            debug!(session = %self.id, seeded = self.metrics_seed.is_some(), "Generating dashboard metrics");
            generate_metrics(self.metrics_seed)
        })
    }

    pub fn current_page(&self) -> Page {
        self.navigator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .current()
    }

    pub fn navigate(&self, page: Page) -> Page {
        debug!(session = %self.id, page = page.label(), "Navigating");
        self.navigator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .select(page)
    }

    fn touch(&self) {
        *self
            .last_seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Instant::now();
    }

    fn idle_for(&self, now: Instant) -> Duration {
        let last = *self
            .last_seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        now.saturating_duration_since(last)
    }
}

/// All live sessions, keyed by the id carried in the session cookie.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<SessionContext>>>>,
    ttl: Duration,
    metrics_seed: Option<u64>,
}

impl SessionStore {
    pub fn new(ttl: Duration, metrics_seed: Option<u64>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            metrics_seed,
        }
    }

    /// Returns the session for `id`, or a fresh one when the id is absent,
    /// unknown or expired.
    pub fn resolve(&self, id: Option<Uuid>) -> Arc<SessionContext> {
        if let Some(id) = id {
            let sessions = self
                .sessions
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(session) = sessions.get(&id) {
                if session.idle_for(Instant::now()) <= self.ttl {
                    session.touch();
                    return Arc::clone(session);
                }
            }
        }
        self.create()
    }

    fn create(&self) -> Arc<SessionContext> {
        let session = Arc::new(SessionContext::new(Uuid::new_v4(), self.metrics_seed));
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self::evict_idle(&mut sessions, self.ttl, Instant::now());
        sessions.insert(session.id, Arc::clone(&session));
        debug!(session = %session.id, live = sessions.len(), "Session created");
        session
    }

    /// Drops every session idle for longer than the TTL.
    pub fn evict_expired(&self) -> usize {
        let mut sessions = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self::evict_idle(&mut sessions, self.ttl, Instant::now())
    }

    /// Sweeps expired sessions every `every`, so the map shrinks even when
    /// only returning visitors are active.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                store.evict_expired();
            }
        })
    }

    fn evict_idle(
        sessions: &mut HashMap<Uuid, Arc<SessionContext>>,
        ttl: Duration,
        now: Instant,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, s| s.idle_for(now) <= ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, live = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
