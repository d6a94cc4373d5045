//! Theme configuration for the terminal intro
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the animated view) and ANSI escape
//! codes (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Colors used to draw the faux terminal.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Command text typed at a prompt
    pub command: Color,
    /// Body text of revealed sections
    pub text: Color,
    /// Headings inside revealed sections
    pub heading: Color,
    /// List bullets and the blinking cursor
    pub accent: Color,
    /// Secondary/dimmed text
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    /// Green-on-black terminal look.
    pub fn phosphor() -> Self {
        Self {
            command: Color::Green,
            text: Color::Gray,
            heading: Color::LightGreen,
            accent: Color::Green,
            dim: Color::DarkGray,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            command: Color::White,
            text: Color::Gray,
            heading: Color::White,
            accent: Color::Yellow,
            dim: Color::DarkGray,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            command: Color::Cyan,
            text: Color::Gray,
            heading: Color::LightCyan,
            accent: Color::LightCyan,
            dim: Color::DarkGray,
        }
    }

    /// Look a theme up by name, falling back to the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Self::classic(),
            "ocean" => Self::ocean(),
            "phosphor" => Self::phosphor(),
            other => {
                tracing::warn!(theme = other, "unknown theme, using default");
                Self::default()
            }
        }
    }

    // Style helpers

    pub fn command_style(&self) -> Style {
        Style::default().fg(self.command)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of a region still carrying the in-progress marker.
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::SLOW_BLINK)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    // ANSI color helpers for CLI output

    /// Format text with the command color (for CLI output).
    pub fn command_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.command), text, ANSI_RESET)
    }

    /// Format text with the body color (for CLI output).
    pub fn body_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text), text, ANSI_RESET)
    }

    /// Format text with the dimmed color (for CLI output).
    pub fn dim_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.dim), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_phosphor() {
        let theme = Theme::default();
        assert_eq!(theme.command, Color::Green);
        assert_eq!(theme.heading, Color::LightGreen);
    }

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Ocean").command, Color::Cyan);
        assert_eq!(Theme::by_name("classic").command, Color::White);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("nope").command, Theme::default().command);
    }

    #[test]
    fn cursor_style_blinks() {
        let style = Theme::default().cursor_style();
        assert!(style.add_modifier.contains(Modifier::SLOW_BLINK));
        assert_eq!(style.fg, Some(Color::Green));
    }

    #[test]
    fn ansi_helpers_wrap_with_color_codes() {
        let theme = Theme::phosphor();
        let cmd = theme.command_text("ls");
        assert!(cmd.starts_with("\x1b[32m"));
        assert!(cmd.ends_with("\x1b[0m"));
        assert!(cmd.contains("ls"));

        let dim = theme.dim_text("x");
        assert!(dim.starts_with("\x1b[90m"));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Gray), "\x1b[37m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
