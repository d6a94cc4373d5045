//! Timer-driven typing animation.
//!
//! Everything runs on one thread against a virtual millisecond clock. The
//! [`Engine`] owns the surface and a timer queue; producers, reveals and
//! sequence stages are all timer [`Action`]s, so a test can fast-forward
//! the clock instead of sleeping.
//!
//! # Module Structure
//!
//! - `timer`: ordered timer queue and virtual clock
//! - `config`: per-call typing configuration
//! - `typewriter`: text and markup producers, reveal scheduling
//! - `sequence`: the intro's stage machine and immediate reveal
//! - `engine`: dispatch loop tying the above together

mod config;
mod engine;
mod error;
mod sequence;
mod timer;
mod typewriter;

pub use config::TypingConfig;
pub use engine::{Action, Engine};
pub use error::IntroError;
pub use sequence::{Pauses, Stage};
pub use timer::{TimerId, TimerQueue};
pub use typewriter::JobId;
