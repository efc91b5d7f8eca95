//! Tab-scoped session record. The three storage keys are kept exactly as the web
//! pages expect them so a session written by one page is readable by the other.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

pub const KEY_AUTHENTICATED: &str = "isAuthenticated";
pub const KEY_USERNAME: &str = "username";
pub const KEY_LOGIN_TIME: &str = "loginTime";

/// Volatile key/value store scoped to one tab.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    None,
    Authenticated {
        username: String,
        since: DateTime<Utc>,
    },
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username, .. } => Some(username),
            Self::None => None,
        }
    }
}

/// Typed view over a [`SessionStorage`].
#[derive(Debug, Default)]
pub struct SessionContext<S> {
    storage: S,
}

impl<S: SessionStorage> SessionContext<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Any non-empty `isAuthenticated` value counts as a session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.storage
            .get_item(KEY_AUTHENTICATED)
            .is_some_and(|value| !value.is_empty())
    }

    #[must_use]
    pub fn load(&self) -> Session {
        if !self.is_authenticated() {
            return Session::None;
        }

        let username = self.storage.get_item(KEY_USERNAME).unwrap_or_default();
        let since = self
            .storage
            .get_item(KEY_LOGIN_TIME)
            .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
            .map_or(DateTime::<Utc>::UNIX_EPOCH, |time| time.with_timezone(&Utc));

        Session::Authenticated { username, since }
    }

    pub fn establish(&mut self, username: &str, since: DateTime<Utc>) -> Session {
        self.storage.set_item(KEY_AUTHENTICATED, "true");
        self.storage.set_item(KEY_USERNAME, username);
        self.storage.set_item(KEY_LOGIN_TIME, &since.to_rfc3339());

        debug!("session established for {}", username);

        Session::Authenticated {
            username: username.to_string(),
            since,
        }
    }

    pub fn clear(&mut self) {
        self.storage.remove_item(KEY_AUTHENTICATED);
        self.storage.remove_item(KEY_USERNAME);
        self.storage.remove_item(KEY_LOGIN_TIME);
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
