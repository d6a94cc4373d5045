//! The intro sequence.
//!
//! ```text
//! Idle -> TypingCmd1 -> RevealWelcome -> TypingSpace -> TypingCmd2
//!      -> RevealPages -> RevealFinalLine -> TypingFinalCursor
//! ```
//!
//! Each stage is entered from the previous stage's completion plus a fixed
//! pause. There is no way back and no cancellation.

use serde::{Deserialize, Serialize};

use super::config::TypingConfig;
use super::engine::{Action, Engine};
use super::error::IntroError;
use crate::page::{
    CAT_COMMAND, FINAL_COMMAND_LINE, FINAL_CURSOR, NEW_COMMAND_LINE, PAGES_LIST, TYPED_SPACE,
    WELCOME_SECTION,
};
use crate::surface::{Content, Region, Surface, TYPING_MARKER};

/// Stage of the intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Idle,
    TypingCmd1,
    RevealWelcome,
    TypingSpace,
    TypingCmd2,
    RevealPages,
    RevealFinalLine,
    /// Terminal stage; its cursor keeps blinking
    TypingFinalCursor,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Idle => Some(Stage::TypingCmd1),
            Stage::TypingCmd1 => Some(Stage::RevealWelcome),
            Stage::RevealWelcome => Some(Stage::TypingSpace),
            Stage::TypingSpace => Some(Stage::TypingCmd2),
            Stage::TypingCmd2 => Some(Stage::RevealPages),
            Stage::RevealPages => Some(Stage::RevealFinalLine),
            Stage::RevealFinalLine => Some(Stage::TypingFinalCursor),
            Stage::TypingFinalCursor => None,
        }
    }

    /// Pause (ms) between the previous stage completing and this one starting.
    pub fn pause_before(self, pauses: &Pauses) -> u64 {
        match self {
            Stage::RevealWelcome => pauses.after_first_command,
            Stage::RevealPages => pauses.after_second_command,
            Stage::RevealFinalLine => pauses.before_final_line,
            Stage::TypingFinalCursor => pauses.before_final_cursor,
            _ => 0,
        }
    }
}

/// Fixed inter-stage pauses in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pauses {
    /// First command typed, before the welcome section appears
    pub after_first_command: u64,
    /// Second command typed, before the pages list appears
    pub after_second_command: u64,
    /// Pages list shown, before the final command line appears
    pub before_final_line: u64,
    /// Final command line shown, before its cursor is typed
    pub before_final_cursor: u64,
}

impl Default for Pauses {
    fn default() -> Self {
        Self {
            after_first_command: 1000,
            after_second_command: 800,
            before_final_line: 300,
            before_final_cursor: 500,
        }
    }
}

impl Pauses {
    /// Sum of all pauses.
    pub fn total(&self) -> u64 {
        self.after_first_command
            + self.after_second_command
            + self.before_final_line
            + self.before_final_cursor
    }
}

impl<S: Surface> Engine<S> {
    /// Start the animated intro. Does nothing if it already ran.
    pub fn start_sequence(&mut self) {
        if self.stage != Stage::Idle || self.complete {
            tracing::warn!(stage = ?self.stage, "intro already started");
            return;
        }
        tracing::info!("starting intro sequence");
        self.enter(Stage::TypingCmd1);
    }

    pub(super) fn enter(&mut self, stage: Stage) {
        tracing::debug!(?stage, now = self.now(), "entering stage");
        self.stage = stage;
        let speed = self.script.typing_speed_ms;
        let done = Action::Finished(stage);

        match stage {
            Stage::Idle => {}
            Stage::TypingCmd1 => {
                let text = self.script.first_command.clone();
                self.type_text(
                    CAT_COMMAND,
                    &text,
                    TypingConfig::new()
                        .speed(speed)
                        .remove_cursor(true)
                        .on_complete(done),
                );
            }
            Stage::RevealWelcome => {
                self.reveal(WELCOME_SECTION);
                self.finished(stage);
            }
            Stage::TypingSpace => {
                let html = self.script.space.clone();
                self.type_html(
                    TYPED_SPACE,
                    &html,
                    TypingConfig::new()
                        .speed(speed)
                        .show_element(NEW_COMMAND_LINE, 0)
                        .on_complete(done),
                );
            }
            Stage::TypingCmd2 => {
                let text = self.script.second_command.clone();
                self.type_text(
                    NEW_COMMAND_LINE,
                    &text,
                    TypingConfig::new()
                        .speed(speed)
                        .remove_cursor(true)
                        .on_complete(done),
                );
            }
            Stage::RevealPages => {
                self.reveal(PAGES_LIST);
                self.finished(stage);
            }
            Stage::RevealFinalLine => {
                self.reveal(FINAL_COMMAND_LINE);
                self.finished(stage);
            }
            Stage::TypingFinalCursor => {
                let text = self.script.cursor.clone();
                self.type_text(
                    FINAL_CURSOR,
                    &text,
                    TypingConfig::new().speed(speed).on_complete(done),
                );
            }
        }
    }

    pub(super) fn finished(&mut self, stage: Stage) {
        match stage.next() {
            Some(next) => {
                let pause = next.pause_before(&self.pauses);
                self.timers.schedule(pause, Action::Enter(next));
            }
            None => {
                self.complete = true;
                tracing::info!(now = self.now(), "intro sequence complete");
            }
        }
    }

    /// Put every region straight into its final state, without timers.
    ///
    /// Produces the same document the animated sequence ends with.
    pub fn show_all_immediately(&mut self) {
        tracing::info!("showing final state without animation");
        let script = self.script.clone();

        self.settle(CAT_COMMAND, |r| {
            r.set_content(Content::Text(script.first_command.clone()));
            r.set_marker(TYPING_MARKER, false);
        });
        self.settle(WELCOME_SECTION, Region::reveal);
        self.settle(TYPED_SPACE, |r| {
            r.set_content(Content::Markup(script.space.clone()));
        });
        self.settle(NEW_COMMAND_LINE, |r| {
            r.reveal();
            r.set_content(Content::Text(script.second_command.clone()));
            r.set_marker(TYPING_MARKER, false);
        });
        self.settle(PAGES_LIST, Region::reveal);
        self.settle(FINAL_COMMAND_LINE, Region::reveal);
        self.settle(FINAL_CURSOR, |r| {
            r.set_content(Content::Text(script.cursor.clone()));
            r.set_marker(TYPING_MARKER, true);
        });

        self.complete = true;
    }

    /// The surface the intro ends with, leaving this engine untouched.
    pub fn final_surface(&self) -> S
    where
        S: Clone,
    {
        let mut preview = Engine::new(self.surface.clone(), self.script.clone(), self.pauses);
        preview.show_all_immediately();
        preview.surface
    }

    fn settle(&mut self, id: &str, apply: impl FnOnce(&mut Region)) {
        match self.surface.region_mut(id) {
            Some(region) => apply(region),
            None => self.report(IntroError::RegionNotFound { id: id.to_string() }),
        }
    }
}
