//! Per-call typing configuration.

use super::engine::Action;

/// Options for one typed-output call.
///
/// Built fresh for each call: start from [`TypingConfig::default`] and
/// override what the call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    /// Milliseconds per character (text) or before the single write (markup)
    pub speed: u64,
    /// Remove the in-progress marker from the target once typing completes
    pub remove_cursor: bool,
    /// Region to reveal once typing completes
    pub show_element_id: Option<String>,
    /// Delay before that reveal, in milliseconds
    pub show_delay: u64,
    /// Action dispatched exactly once on completion
    pub on_complete: Option<Action>,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            speed: 100,
            remove_cursor: false,
            show_element_id: None,
            show_delay: 0,
            on_complete: None,
        }
    }
}

impl TypingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(mut self, ms: u64) -> Self {
        self.speed = ms;
        self
    }

    pub fn remove_cursor(mut self, remove: bool) -> Self {
        self.remove_cursor = remove;
        self
    }

    /// Reveal `id` after `delay_ms` once typing completes.
    pub fn show_element(mut self, id: impl Into<String>, delay_ms: u64) -> Self {
        self.show_element_id = Some(id.into());
        self.show_delay = delay_ms;
        self
    }

    pub fn on_complete(mut self, action: Action) -> Self {
        self.on_complete = Some(action);
        self
    }
}
