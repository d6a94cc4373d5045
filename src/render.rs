//! Drawing a [`Document`] in the terminal.
//!
//! Shown regions are laid out top to bottom in page order. Inline regions
//! continue the previous line. Text regions are commands; markup regions
//! are converted with [`crate::markup`].
//!
//! A block region carrying the in-progress marker gets a blinking caret
//! after its text. An inline region carrying it is the caret itself and
//! blinks as a whole.

use ratatui::{
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::markup::{self, BULLET};
use crate::surface::{Content, Document, Region, TYPING_MARKER};
use crate::theme::Theme;

/// Caret drawn after a block region that is still being typed.
pub const CARET: &str = "▌";

/// Document as plain text lines (no styling, no caret, no trailing spaces).
pub fn plain_lines(doc: &Document) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for region in doc.regions().iter().filter(|r| r.is_shown()) {
        let mut region_lines = content_lines(region.content());
        if region.is_inline() {
            if let (Some(last), Some(first)) = (lines.last_mut(), region_lines.first()) {
                last.push(' ');
                last.push_str(first);
                region_lines.remove(0);
            }
        }
        lines.extend(region_lines);
    }
    lines
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Document as styled lines for ratatui.
pub fn styled_lines(doc: &Document, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for region in doc.regions().iter().filter(|r| r.is_shown()) {
        let typing = region.has_marker(TYPING_MARKER);

        if region.is_inline() {
            let style = if typing {
                theme.cursor_style()
            } else {
                theme.command_style()
            };
            let text = region.content().as_str();
            match lines.last_mut() {
                Some(last) if !text.is_empty() => {
                    last.spans.push(Span::raw(" "));
                    last.spans.push(Span::styled(text.to_string(), style));
                }
                Some(_) => {}
                None => lines.push(Line::from(Span::styled(text.to_string(), style))),
            }
            continue;
        }

        let mut region_lines = region_spans(region, theme);
        if typing {
            let caret = Span::styled(CARET, theme.cursor_style());
            match region_lines.last_mut() {
                Some(last) => last.spans.push(caret),
                None => region_lines.push(Line::from(caret)),
            }
        }
        lines.extend(region_lines);
    }
    lines
}

/// Number of terminal rows the document needs at `cols` columns.
pub fn height(doc: &Document, cols: u16) -> u16 {
    let cols = usize::from(cols.max(1));
    let rows: usize = plain_lines(doc)
        .iter()
        .map(|line| {
            // Leave room for a trailing caret
            let width = line.width() + 1;
            width.div_ceil(cols).max(1)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draw the document into the whole frame.
pub fn draw(frame: &mut Frame, doc: &Document, theme: &Theme) {
    let paragraph = Paragraph::new(styled_lines(doc, theme)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, frame.area());
}

fn content_lines(content: &Content) -> Vec<String> {
    match content {
        Content::Text(text) if text.is_empty() => Vec::new(),
        Content::Text(text) => text.lines().map(str::to_string).collect(),
        Content::Markup(html) => markup::to_lines(html),
    }
}

fn region_spans(region: &Region, theme: &Theme) -> Vec<Line<'static>> {
    match region.content() {
        Content::Text(_) => content_lines(region.content())
            .into_iter()
            .map(|line| Line::from(Span::styled(line, theme.command_style())))
            .collect(),
        Content::Markup(html) => {
            let mut lines = markup::to_lines(html).into_iter();
            let mut styled = Vec::new();
            // First line of a section reads as its heading
            if let Some(first) = lines.next() {
                styled.push(markup_line(first, theme, true));
            }
            styled.extend(lines.map(|line| markup_line(line, theme, false)));
            styled
        }
    }
}

fn markup_line(line: String, theme: &Theme, first: bool) -> Line<'static> {
    if let Some(item) = line.strip_prefix(BULLET) {
        return Line::from(vec![
            Span::styled(BULLET, theme.dim_style()),
            Span::styled(item.to_string(), theme.text_style()),
        ]);
    }
    let style = if first {
        theme.heading_style()
    } else {
        theme.text_style()
    };
    Line::from(Span::styled(line, style))
}
