//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod play;
pub mod reset;
pub mod show;

use std::io::{self, Write};

use anyhow::Result;

use crate::render;
use crate::surface::Document;
use crate::theme::Theme;

/// Print the document as plain lines, colored when stdout is a terminal.
pub fn print_page(doc: &Document, theme: &Theme) -> Result<()> {
    let color = atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none();
    let mut stdout = io::stdout().lock();
    for line in render::plain_lines(doc) {
        if !color {
            writeln!(stdout, "{}", line)?;
        } else if line.starts_with('$') {
            writeln!(stdout, "{}", theme.command_text(&line))?;
        } else {
            writeln!(stdout, "{}", theme.body_text(&line))?;
        }
    }
    stdout.flush()?;
    Ok(())
}
