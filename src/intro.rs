//! Page initializer: play the intro on a first visit, skip it otherwise.

use crate::animation::Engine;
use crate::origin::Navigation;
use crate::session::{SessionStore, VisitTracker};
use crate::surface::Surface;

/// Which path the initializer took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Animation started
    First,
    /// Final state shown immediately
    Return,
}

/// Consult the visit tracker, then either start the animated sequence or
/// jump straight to the final state.
pub fn initialize_page<S, T>(
    engine: &mut Engine<S>,
    tracker: &mut VisitTracker<T>,
    nav: &Navigation,
) -> Visit
where
    S: Surface,
    T: SessionStore,
{
    if tracker.is_first_visit(nav) {
        tracing::info!("first visit, playing intro");
        engine.start_sequence();
        Visit::First
    } else {
        tracing::info!("return visit, skipping intro");
        engine.show_all_immediately();
        Visit::Return
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Pauses;
    use crate::page::Script;
    use crate::session::MemorySessionStore;

    fn engine() -> Engine {
        Engine::landing(Script::default(), Pauses::default())
    }

    fn direct() -> Navigation {
        Navigation::new(None, "https://example.com/")
    }

    #[test]
    fn first_visit_starts_animation() {
        let mut engine = engine();
        let mut tracker = VisitTracker::new(MemorySessionStore::new());

        let visit = initialize_page(&mut engine, &mut tracker, &direct());

        assert_eq!(visit, Visit::First);
        assert!(!engine.is_idle());
        assert!(!engine.is_complete());
    }

    #[test]
    fn return_visit_shows_final_state_without_timers() {
        let mut store = MemorySessionStore::new();
        let mut first = engine();
        initialize_page(&mut first, &mut VisitTracker::new(&mut store), &direct());
        first.run_until_idle();

        let mut second = engine();
        let visit = initialize_page(&mut second, &mut VisitTracker::new(&mut store), &direct());

        assert_eq!(visit, Visit::Return);
        assert!(second.is_idle());
        assert!(second.is_complete());
        assert_eq!(second.now(), 0);
        assert_eq!(second.surface(), first.surface());
    }

    #[test]
    fn in_site_navigation_skips_animation() {
        let nav = Navigation::new(
            Some("https://example.com/pages/about.html".into()),
            "https://example.com/",
        );
        let mut engine = engine();
        let mut tracker = VisitTracker::new(MemorySessionStore::new());

        assert_eq!(initialize_page(&mut engine, &mut tracker, &nav), Visit::Return);
        assert!(engine.is_idle());
    }
}
