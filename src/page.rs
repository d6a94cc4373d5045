//! Landing page layout and script.
//!
//! The page is a fixed set of seven named regions. [`Script`] holds the
//! text the intro types into them and the static content of the sections
//! it reveals.

use serde::{Deserialize, Serialize};

use crate::surface::{Content, Display, Document, Region, TYPING_MARKER};

pub const CAT_COMMAND: &str = "cat-command";
pub const WELCOME_SECTION: &str = "welcome-section";
pub const NEW_COMMAND_LINE: &str = "new-command-line";
pub const TYPED_SPACE: &str = "typed-space";
pub const PAGES_LIST: &str = "pages-list";
pub const FINAL_COMMAND_LINE: &str = "final-command-line";
pub const FINAL_CURSOR: &str = "final-cursor";

/// Every region the intro touches, in page order.
pub const REGION_IDS: [&str; 7] = [
    CAT_COMMAND,
    WELCOME_SECTION,
    TYPED_SPACE,
    NEW_COMMAND_LINE,
    PAGES_LIST,
    FINAL_COMMAND_LINE,
    FINAL_CURSOR,
];

/// Text typed and revealed by the intro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// First command, typed into `cat-command`
    pub first_command: String,
    /// Markup of the welcome section
    pub welcome: String,
    /// Markup typed into `typed-space` before the second command
    pub space: String,
    /// Second command, typed into `new-command-line`
    pub second_command: String,
    /// Markup of the pages list
    pub pages: String,
    /// Prompt shown on the final command line
    pub final_prompt: String,
    /// Trailing marker typed after the final prompt
    pub cursor: String,
    /// Milliseconds per typed character
    pub typing_speed_ms: u64,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            first_command: "$ cat introduction.html".to_string(),
            welcome: "<h1>Welcome!</h1><p>I write software that lives close to the metal.</p>"
                .to_string(),
            space: "&nbsp;".to_string(),
            second_command: "$ ls pages/".to_string(),
            pages: "<ul><li>about.html</li><li>projects.html</li><li>contact.html</li></ul>"
                .to_string(),
            final_prompt: "$".to_string(),
            cursor: "_".to_string(),
            typing_speed_ms: 100,
        }
    }
}

/// Build the landing page in its pre-animation state.
///
/// Only the first command line is displayed. The typed regions carry the
/// in-progress marker so the cursor blinks while they are being typed.
pub fn landing(script: &Script) -> Document {
    Document::new()
        .with_region(Region::new(CAT_COMMAND).with_marker(TYPING_MARKER))
        .with_region(
            Region::new(WELCOME_SECTION)
                .hidden(Display::Block)
                .with_content(Content::Markup(script.welcome.clone())),
        )
        .with_region(Region::new(TYPED_SPACE).with_content(Content::Markup(String::new())))
        .with_region(
            Region::new(NEW_COMMAND_LINE)
                .hidden(Display::Flex)
                .with_marker(TYPING_MARKER),
        )
        .with_region(
            Region::new(PAGES_LIST)
                .hidden(Display::Block)
                .with_content(Content::Markup(script.pages.clone())),
        )
        .with_region(
            Region::new(FINAL_COMMAND_LINE)
                .hidden(Display::Flex)
                .with_content(Content::Text(script.final_prompt.clone())),
        )
        .with_region(
            Region::new(FINAL_CURSOR)
                .inline()
                .with_marker(TYPING_MARKER),
        )
}
