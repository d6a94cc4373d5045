//! Session-scoped key/value storage and the visit tracker built on it.
//!
//! - `SessionStore`: the storage capability the tracker is given
//! - `MemorySessionStore`: lives as long as the value (tests, `show`)
//! - `FileSessionStore`: a JSON file scoped to the launching shell
//! - `VisitTracker`: first-visit vs return-visit decision

mod error;
mod file;
mod visit;

use std::collections::HashMap;

pub use error::SessionError;
pub use file::{session_id, FileSessionStore};
pub use visit::{VisitTracker, VISITED_KEY, VISITED_VALUE};

/// String storage that lasts for one browsing session.
pub trait SessionStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Stores that can fail report it themselves and carry on.
    fn set(&mut self, key: &str, value: &str);
}

/// Session store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// End the session, forgetting every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
