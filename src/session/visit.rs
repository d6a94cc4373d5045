//! First-visit detection.

use super::SessionStore;
use crate::origin::Navigation;

/// Session key holding the visit flag.
pub const VISITED_KEY: &str = "hasVisitedMain";

/// Value stored under [`VISITED_KEY`] once the intro has played.
pub const VISITED_VALUE: &str = "true";

/// Decides whether a page load is the first of its session.
#[derive(Debug)]
pub struct VisitTracker<S> {
    store: S,
}

impl<S: SessionStore> VisitTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// First matching rule wins:
    /// 1. same-origin referrer: in-site navigation, not a first visit
    /// 2. flag already set: not a first visit
    /// 3. otherwise set the flag; first visit
    pub fn is_first_visit(&mut self, nav: &Navigation) -> bool {
        if nav.is_same_origin() {
            tracing::debug!("same-origin referrer, treating as return visit");
            return false;
        }
        if self.store.get(VISITED_KEY).is_some() {
            tracing::debug!("session flag already set");
            return false;
        }
        self.store.set(VISITED_KEY, VISITED_VALUE);
        tracing::debug!("first visit in session");
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
