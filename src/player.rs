//! Real-time intro player.
//!
//! Maps wall-clock time onto the engine's virtual clock and redraws the
//! document in an inline ratatui viewport below the shell prompt. The
//! viewport is sized for the final page so nothing scrolls mid-animation.
//!
//! # Usage
//!
//! ```no_run
//! use termintro::animation::{Engine, Pauses};
//! use termintro::config::DisplayConfig;
//! use termintro::page::Script;
//! use termintro::player::{play, PlaybackResult};
//! use termintro::theme::Theme;
//!
//! let mut engine = Engine::landing(Script::default(), Pauses::default());
//! engine.start_sequence();
//! match play(&mut engine, &Theme::default(), &DisplayConfig::default()).unwrap() {
//!     PlaybackResult::Completed => {}
//!     PlaybackResult::Interrupted => eprintln!("Stopped"),
//! }
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};

use crate::animation::Engine;
use crate::config::DisplayConfig;
use crate::render;
use crate::surface::Document;
use crate::theme::Theme;

/// How playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// All work finished and the hold time elapsed
    Completed,
    /// Stopped by Ctrl-C
    Interrupted,
}

/// Play whatever work the engine has pending, in real time.
///
/// Returns once the engine is idle and `display.hold_ms` has passed, or
/// when interrupted. Pending timers are simply dropped on interrupt.
pub fn play(
    engine: &mut Engine<Document>,
    theme: &Theme,
    display: &DisplayConfig,
) -> Result<PlaybackResult> {
    let interrupted = install_interrupt_flag();

    let (cols, _) = crossterm::terminal::size().context("Failed to query terminal size")?;
    let final_page = engine.final_surface();
    let height = render::height(&final_page, cols).max(1);

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
    .context("Failed to set up terminal")?;
    terminal.hide_cursor()?;

    let frame = Duration::from_millis(display.frame_ms.max(1));
    let hold = Duration::from_millis(display.hold_ms);
    let start = Instant::now();
    let base = engine.now();
    let mut idle_since: Option<Instant> = None;

    let result = loop {
        if interrupted.load(Ordering::SeqCst) {
            tracing::info!(now = engine.now(), "playback interrupted");
            break PlaybackResult::Interrupted;
        }

        let elapsed = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        engine.advance_to(base.saturating_add(elapsed));
        terminal.draw(|f| render::draw(f, engine.surface(), theme))?;

        if engine.is_idle() {
            let since = *idle_since.get_or_insert_with(Instant::now);
            if since.elapsed() >= hold {
                break PlaybackResult::Completed;
            }
        }

        std::thread::sleep(frame);
    };

    terminal.show_cursor()?;
    drop(terminal);
    let mut stdout = io::stdout();
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(result)
}

/// Ctrl-C sets the returned flag instead of killing the process, so the
/// terminal cursor is restored on the way out.
fn install_interrupt_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %e, "could not install Ctrl-C handler");
    }
    flag
}
