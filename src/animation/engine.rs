//! Dispatch loop for the animation.

use std::collections::HashMap;

use super::error::IntroError;
use super::sequence::{Pauses, Stage};
use super::timer::TimerQueue;
use super::typewriter::{Job, JobId};
use crate::page::{self, Script};
use crate::surface::{Document, Surface};

/// Work carried by a timer or dispatched on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type the next character of a text job
    Tick(JobId),
    /// Write the whole markup of a markup job
    Flush(JobId),
    /// Reveal a region
    Reveal(String),
    /// Enter a stage of the intro sequence
    Enter(Stage),
    /// A stage of the intro sequence has completed
    Finished(Stage),
    /// Record a named notification (for callers chaining their own work)
    Notify(String),
}

/// Owns the surface, the clock and all in-flight work.
#[derive(Debug)]
pub struct Engine<S = Document> {
    pub(super) surface: S,
    pub(super) timers: TimerQueue<Action>,
    pub(super) jobs: HashMap<JobId, Job>,
    pub(super) next_job: u64,
    pub(super) script: Script,
    pub(super) pauses: Pauses,
    pub(super) stage: Stage,
    pub(super) complete: bool,
    diagnostics: Vec<IntroError>,
    notifications: Vec<String>,
}

impl Engine<Document> {
    /// Engine over the landing page in its pre-animation state.
    pub fn landing(script: Script, pauses: Pauses) -> Self {
        let document = page::landing(&script);
        Self::new(document, script, pauses)
    }
}

impl<S: Surface> Engine<S> {
    pub fn new(surface: S, script: Script, pauses: Pauses) -> Self {
        Self {
            surface,
            timers: TimerQueue::new(),
            jobs: HashMap::new(),
            next_job: 0,
            script,
            pauses,
            stage: Stage::Idle,
            complete: false,
            diagnostics: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the next timer, if any work is pending.
    pub fn next_due(&self) -> Option<u64> {
        self.timers.next_due()
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Current stage of the intro sequence.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the page has reached its final state.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Errors reported so far, oldest first.
    pub fn diagnostics(&self) -> &[IntroError] {
        &self.diagnostics
    }

    /// Notifications dispatched so far, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Advance the clock by `ms`, firing every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now().saturating_add(ms);
        self.advance_to(target);
    }

    /// Advance the clock to `time`, firing every timer due at or before it.
    pub fn advance_to(&mut self, time: u64) {
        while let Some(action) = self.timers.pop_due(time) {
            self.dispatch(action);
        }
        self.timers.set_now(time);
    }

    /// Fire timers until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.timers.next_due() {
            self.advance_to(due);
        }
    }

    pub(super) fn dispatch(&mut self, action: Action) {
        tracing::trace!(now = self.now(), ?action, "dispatch");
        match action {
            Action::Tick(id) => self.tick(id),
            Action::Flush(id) => self.flush(id),
            Action::Reveal(id) => self.reveal(&id),
            Action::Enter(stage) => self.enter(stage),
            Action::Finished(stage) => self.finished(stage),
            Action::Notify(name) => {
                tracing::debug!(%name, "notification");
                self.notifications.push(name);
            }
        }
    }

    /// Report an error on the error channel. The caller skips the step.
    pub(super) fn report(&mut self, error: IntroError) {
        tracing::error!(%error, "intro step skipped");
        self.diagnostics.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TypingConfig;

    fn engine() -> Engine {
        Engine::landing(Script::default(), Pauses::default())
    }

    #[test]
    fn new_engine_is_idle_at_time_zero() {
        let engine = engine();
        assert_eq!(engine.now(), 0);
        assert!(engine.is_idle());
        assert_eq!(engine.stage(), Stage::Idle);
        assert!(!engine.is_complete());
    }

    #[test]
    fn advance_moves_clock_without_timers() {
        let mut engine = engine();
        engine.advance(250);
        assert_eq!(engine.now(), 250);
    }

    #[test]
    fn notify_is_recorded_once() {
        let mut engine = engine();
        engine.type_text(
            page::CAT_COMMAND,
            "ab",
            TypingConfig::new().on_complete(Action::Notify("done".into())),
        );
        engine.run_until_idle();
        engine.advance(10_000);
        assert_eq!(engine.notifications(), ["done".to_string()]);
    }

    #[test]
    fn run_until_idle_stops_at_last_deadline() {
        let mut engine = engine();
        engine.type_text(page::CAT_COMMAND, "abc", TypingConfig::new().speed(10));
        engine.run_until_idle();
        assert_eq!(engine.now(), 30);
        assert!(engine.is_idle());
    }
}
