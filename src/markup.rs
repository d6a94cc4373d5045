//! Markup to terminal text.
//!
//! Region markup is a small HTML subset. Block tags and `<br>` start new
//! lines, `<li>` becomes a bullet, other tags are dropped, and entities are
//! decoded. A non-breaking space survives whitespace collapsing, so a
//! region holding only `&nbsp;` renders as one blank line.

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "h1", "h2", "h3", "h4", "h5", "h6",
    "ul", "ol", "pre", "blockquote", "tr",
];

const NBSP: char = '\u{a0}';

/// Bullet prefix for list items.
pub const BULLET: &str = "• ";

/// Convert markup into display lines.
pub fn to_lines(markup: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = markup.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '<' => {
                let rest = &markup[i + 1..];
                let Some(end) = rest.find('>') else {
                    push_text(&mut current, '<');
                    continue;
                };
                let tag = &rest[..end];
                // Skip the tag body
                for _ in 0..tag.chars().count() + 1 {
                    chars.next();
                }
                handle_tag(tag, &mut current, &mut lines);
            }
            '&' => {
                let rest = &markup[i + 1..];
                match decode_entity(rest) {
                    Some((decoded, consumed)) => {
                        for _ in 0..consumed {
                            chars.next();
                        }
                        push_text(&mut current, decoded);
                    }
                    None => push_text(&mut current, '&'),
                }
            }
            _ => push_text(&mut current, ch),
        }
    }
    break_line(&mut current, &mut lines);

    lines
        .into_iter()
        .map(|line| line.replace(NBSP, " "))
        .collect()
}

fn push_text(current: &mut String, ch: char) {
    if ch.is_ascii_whitespace() {
        if !current.is_empty() && !current.ends_with(' ') {
            current.push(' ');
        }
    } else {
        current.push(ch);
    }
}

fn break_line(current: &mut String, lines: &mut Vec<String>) {
    let line = current.trim_end_matches(' ').to_string();
    current.clear();
    if !line.is_empty() {
        lines.push(line);
    }
}

fn handle_tag(tag: &str, current: &mut String, lines: &mut Vec<String>) {
    let tag = tag.trim();
    let closing = tag.starts_with('/');
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    match name.as_str() {
        "br" => break_line(current, lines),
        "li" => {
            break_line(current, lines);
            if !closing {
                current.push_str(BULLET);
            }
        }
        n if BLOCK_TAGS.contains(&n) => break_line(current, lines),
        _ => {}
    }
}

/// Decode an entity at the start of `rest` (just past the `&`).
///
/// Returns the character and how many chars of `rest` it used, including
/// the trailing `;`.
fn decode_entity(rest: &str) -> Option<(char, usize)> {
    let semi = rest.find(';')?;
    let name = &rest[..semi];
    if name.is_empty() || name.len() > 10 {
        return None;
    }

    let ch = match name {
        "nbsp" => NBSP,
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)?
        }
    };
    Some((ch, name.chars().count() + 1))
}
