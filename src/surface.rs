//! Presentation surface for the intro.
//!
//! A surface is a set of named regions. Producers and the reveal scheduler
//! only ever touch regions through the [`Surface`] trait, so the animation
//! logic never depends on how (or whether) the regions are drawn.
//!
//! [`Document`] is the in-memory surface. The terminal renderer draws it,
//! and tests inspect it directly.

use std::collections::BTreeSet;

/// Marker class present while a region is still receiving simulated typing.
pub const TYPING_MARKER: &str = "typing";

/// Marker class added when a region is revealed.
pub const VISIBLE_MARKER: &str = "visible";

/// How a region is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Not displayed at all
    #[default]
    Hidden,
    /// Block layout (own line)
    Block,
    /// Flex row layout (own line, children side by side)
    Flex,
}

/// Region content, either literal text or raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Markup(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(s) | Content::Markup(s) => s,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Content::Markup(_))
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

/// A named, independently visible area of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: String,
    content: Content,
    display: Display,
    /// Display mode applied when the region is revealed
    reveal_display: Display,
    visible: bool,
    markers: BTreeSet<String>,
    /// Rendered on the same line as the preceding region
    inline: bool,
}

impl Region {
    /// A displayed block region with empty text.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Content::default(),
            display: Display::Block,
            reveal_display: Display::Block,
            visible: true,
            markers: BTreeSet::new(),
            inline: false,
        }
    }

    /// Start hidden; revealing switches the display to `reveal_as`.
    pub fn hidden(mut self, reveal_as: Display) -> Self {
        self.display = Display::Hidden;
        self.reveal_display = reveal_as;
        self.visible = false;
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn with_marker(mut self, marker: &str) -> Self {
        self.markers.insert(marker.to_string());
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn display(&self) -> Display {
        self.display
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Whether the region takes part in layout right now.
    pub fn is_shown(&self) -> bool {
        self.visible && self.display != Display::Hidden
    }

    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Append one character to text content.
    ///
    /// Markup content is converted to text first; producers never mix the two.
    pub fn push_char(&mut self, ch: char) {
        match &mut self.content {
            Content::Text(s) => s.push(ch),
            Content::Markup(s) => {
                let mut text = std::mem::take(s);
                text.push(ch);
                self.content = Content::Text(text);
            }
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    pub fn set_marker(&mut self, marker: &str, on: bool) {
        if on {
            self.markers.insert(marker.to_string());
        } else {
            self.markers.remove(marker);
        }
    }

    /// Make the region visible in its reveal layout.
    pub fn reveal(&mut self) {
        self.display = self.reveal_display;
        self.visible = true;
        self.set_marker(VISIBLE_MARKER, true);
    }
}

/// Access to the named regions of the presented page.
pub trait Surface {
    /// Look up a region by id.
    fn region(&self, id: &str) -> Option<&Region>;

    /// Look up a region by id for mutation.
    fn region_mut(&mut self, id: &str) -> Option<&mut Region>;

    fn contains(&self, id: &str) -> bool {
        self.region(id).is_some()
    }
}

/// In-memory surface; regions keep their insertion order for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    regions: Vec<Region>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region, replacing any existing region with the same id.
    pub fn insert(&mut self, region: Region) {
        match self.regions.iter_mut().find(|r| r.id == region.id) {
            Some(existing) => *existing = region,
            None => self.regions.push(region),
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.insert(region);
        self
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Surface for Document {
    fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    fn region_mut(&mut self, id: &str) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_region_is_displayed_block() {
        let region = Region::new("a");
        assert!(region.is_shown());
        assert_eq!(region.display(), Display::Block);
        assert_eq!(region.content(), &Content::Text(String::new()));
    }

    #[test]
    fn hidden_region_reveals_with_requested_display() {
        let mut region = Region::new("a").hidden(Display::Flex);
        assert!(!region.is_shown());

        region.reveal();

        assert!(region.is_shown());
        assert_eq!(region.display(), Display::Flex);
        assert!(region.has_marker(VISIBLE_MARKER));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut once = Region::new("a").hidden(Display::Block);
        once.reveal();
        let mut twice = once.clone();
        twice.reveal();
        assert_eq!(once, twice);
    }

    #[test]
    fn push_char_appends_in_order() {
        let mut region = Region::new("a");
        for ch in "héllo".chars() {
            region.push_char(ch);
        }
        assert_eq!(region.content().as_str(), "héllo");
        assert_eq!(region.content().char_len(), 5);
    }

    #[test]
    fn push_char_on_markup_switches_to_text() {
        let mut region = Region::new("a").with_content(Content::Markup("x".into()));
        region.push_char('y');
        assert_eq!(region.content(), &Content::Text("xy".into()));
    }

    #[test]
    fn set_marker_adds_and_removes() {
        let mut region = Region::new("a").with_marker(TYPING_MARKER);
        assert!(region.has_marker(TYPING_MARKER));
        region.set_marker(TYPING_MARKER, false);
        assert!(!region.has_marker(TYPING_MARKER));
        assert_eq!(region.markers().count(), 0);
    }

    #[test]
    fn document_lookup_and_replace() {
        let mut doc = Document::new()
            .with_region(Region::new("a"))
            .with_region(Region::new("b"));
        assert!(doc.contains("a"));
        assert!(!doc.contains("c"));

        doc.insert(Region::new("a").hidden(Display::Block));
        assert_eq!(doc.regions().len(), 2);
        assert_eq!(doc.regions()[0].id(), "a");
        assert!(!doc.region("a").unwrap().is_visible());
    }
}
