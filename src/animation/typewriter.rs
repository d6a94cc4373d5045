//! Typed-output producers and the reveal scheduler.
//!
//! Text mode reveals one character per tick. Markup mode waits one tick
//! and writes the whole markup at once, so the region never holds a
//! half-written tag or entity.

use super::config::TypingConfig;
use super::engine::{Action, Engine};
use super::error::IntroError;
use crate::surface::{Content, Surface, TYPING_MARKER};

/// Identifies one typed-output call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(u64);

#[derive(Debug)]
pub(super) struct Job {
    target: String,
    kind: JobKind,
    config: TypingConfig,
}

#[derive(Debug)]
enum JobKind {
    Text { chars: Vec<char>, typed: usize },
    Markup(String),
}

impl<S: Surface> Engine<S> {
    /// Type `text` into `target` one character per `config.speed` ms.
    ///
    /// Returns `None` (after reporting the error) if `target` does not exist.
    pub fn type_text(&mut self, target: &str, text: &str, config: TypingConfig) -> Option<JobId> {
        let kind = JobKind::Text {
            chars: text.chars().collect(),
            typed: 0,
        };
        self.start(target, kind, config, Content::Text(String::new()))
    }

    /// Write `html` into `target` in one step after `config.speed` ms.
    ///
    /// Returns `None` (after reporting the error) if `target` does not exist.
    pub fn type_html(&mut self, target: &str, html: &str, config: TypingConfig) -> Option<JobId> {
        let kind = JobKind::Markup(html.to_string());
        self.start(target, kind, config, Content::Markup(String::new()))
    }

    /// Reveal `id` now. A missing region is reported and skipped.
    pub fn reveal(&mut self, id: &str) {
        match self.surface.region_mut(id) {
            Some(region) => {
                region.reveal();
                tracing::debug!(region = id, "revealed");
            }
            None => self.report(IntroError::RegionNotFound { id: id.to_string() }),
        }
    }

    fn start(
        &mut self,
        target: &str,
        kind: JobKind,
        config: TypingConfig,
        cleared: Content,
    ) -> Option<JobId> {
        let Some(region) = self.surface.region_mut(target) else {
            self.report(IntroError::RegionNotFound {
                id: target.to_string(),
            });
            return None;
        };
        region.set_content(cleared);

        let id = JobId(self.next_job);
        self.next_job += 1;

        let action = match kind {
            JobKind::Text { .. } => Action::Tick(id),
            JobKind::Markup(_) => Action::Flush(id),
        };
        self.timers.schedule(config.speed, action);
        tracing::debug!(region = target, ?id, speed = config.speed, "typing started");

        self.jobs.insert(
            id,
            Job {
                target: target.to_string(),
                kind,
                config,
            },
        );
        Some(id)
    }

    pub(super) fn tick(&mut self, id: JobId) {
        let Some(job) = self.jobs.get_mut(&id) else {
            return;
        };
        let JobKind::Text { chars, typed } = &mut job.kind else {
            return;
        };

        if let Some(&ch) = chars.get(*typed) {
            match self.surface.region_mut(&job.target) {
                Some(region) => region.push_char(ch),
                None => {
                    let target = job.target.clone();
                    self.jobs.remove(&id);
                    self.report(IntroError::RegionNotFound { id: target });
                    return;
                }
            }
            *typed += 1;
        }

        if *typed < chars.len() {
            let speed = job.config.speed;
            self.timers.schedule(speed, Action::Tick(id));
        } else if let Some(job) = self.jobs.remove(&id) {
            self.complete_job(job);
        }
    }

    pub(super) fn flush(&mut self, id: JobId) {
        let Some(job) = self.jobs.remove(&id) else {
            return;
        };
        let JobKind::Markup(html) = &job.kind else {
            return;
        };

        match self.surface.region_mut(&job.target) {
            Some(region) => region.set_content(Content::Markup(html.clone())),
            None => {
                self.report(IntroError::RegionNotFound { id: job.target });
                return;
            }
        }
        self.complete_job(job);
    }

    /// Marker removal, reveal scheduling, then the completion action.
    fn complete_job(&mut self, job: Job) {
        let Job { target, config, .. } = job;
        tracing::debug!(region = %target, "typing complete");

        if config.remove_cursor {
            if let Some(region) = self.surface.region_mut(&target) {
                region.set_marker(TYPING_MARKER, false);
            }
        }

        if let Some(show) = config.show_element_id {
            if self.surface.contains(&show) {
                self.timers.schedule(config.show_delay, Action::Reveal(show));
            } else {
                self.report(IntroError::RegionNotFound { id: show });
            }
        }

        if let Some(action) = config.on_complete {
            self.dispatch(action);
        }
    }
}
