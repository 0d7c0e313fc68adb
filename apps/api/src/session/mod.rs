//! Navigation state — which of the three pages a session is on, and the
//! transitions between them.
//!
//! The page value lives in a per-session store keyed by a server-issued id,
//! not in process-global state, so concurrent sessions are isolated by this
//! code rather than by the hosting model.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One of the three mutually exclusive UI views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Prediction,
    Chatbot,
}

/// A user-triggered navigation action. There is no history stack: going
/// back always lands on home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    DiveIntoPredictions,
    TalkToChatbot,
    GoBack,
}

impl Page {
    /// Applies a navigation action. Total over all page/action pairs: an
    /// action that does not apply to the current page leaves it unchanged.
    pub fn apply(self, action: NavAction) -> Page {
        match (self, action) {
            (Page::Home, NavAction::DiveIntoPredictions) => Page::Prediction,
            (Page::Home, NavAction::TalkToChatbot) => Page::Chatbot,
            (Page::Prediction | Page::Chatbot, NavAction::GoBack) => Page::Home,
            (page, _) => page,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub page: Page,
    pub created_at: DateTime<Utc>,
}

/// In-memory session store. Sessions live for the process lifetime and are
/// never persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session starting on the home page.
    pub fn create(&self) -> (Uuid, Session) {
        let id = Uuid::new_v4();
        let session = Session {
            page: Page::default(),
            created_at: Utc::now(),
        };
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, session.clone());
        (id, session)
    }

    /// Current page for a session, if it exists.
    pub fn page(&self, id: Uuid) -> Option<Page> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .map(|s| s.page)
    }

    /// Applies a navigation action and returns the resulting page, or `None`
    /// for an unknown session.
    pub fn navigate(&self, id: Uuid, action: NavAction) -> Option<Page> {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.get_mut(&id)?;
        session.page = session.page.apply(action);
        Some(session.page)
    }
}
