//! termintro - a scripted faux-terminal typing intro.
//!
//! Simulates a user typing commands into a terminal, revealing page
//! sections in sequence. The first visit in a session plays the animation;
//! return visits jump straight to the final page.
//!
//! The animation logic runs against injected capabilities (a [`Surface`]
//! of named regions and a [`SessionStore`]) and a virtual clock, so it can
//! be driven in tests without sleeping.
//!
//! [`Surface`]: surface::Surface
//! [`SessionStore`]: session::SessionStore

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod intro;
pub mod logging;
pub mod markup;
pub mod origin;
pub mod page;
pub mod player;
pub mod render;
pub mod session;
pub mod surface;
pub mod theme;

pub use animation::{Engine, IntroError, TypingConfig};
pub use config::Config;
pub use intro::{initialize_page, Visit};
pub use origin::Navigation;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, VisitTracker};
