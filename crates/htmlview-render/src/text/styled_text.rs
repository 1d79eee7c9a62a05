//! Attributed text produced by the HTML style mapper.
//!
//! A [`StyledText`] is a plain string plus an ordered list of attribute
//! assignments ([`StyleRange`]), the same model as an attributed string in a
//! native text widget. Assignments may overlap freely; when two assignments
//! set the same attribute on the same offset, the later one wins. Different
//! attributes never interfere with each other.
//!
//! # Example
//!
//! ```
//! use htmlview_render::text::{Font, StyledText, TextAttribute};
//!
//! let mut styled = StyledText::new("Hello world");
//! styled.add_attribute(TextAttribute::Font(Font::bold_system(14.0)), 6..11)?;
//! styled.add_attribute(TextAttribute::Link("https://example.com".into()), 6..11)?;
//!
//! assert!(styled.attributes_at(7).font.unwrap().is_bold());
//! assert_eq!(styled.link_at(7), Some("https://example.com"));
//! assert_eq!(styled.link_at(2), None);
//! # Ok::<(), htmlview_render::RenderError>(())
//! ```

use std::ops::Range;

use super::{Font, LineStyle};
use crate::error::{RenderError, RenderResult};
use crate::types::Color;

/// A single presentation attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum TextAttribute {
    /// The font used to draw the text.
    Font(Font),
    /// The text (foreground) color.
    ForegroundColor(Color),
    /// Underline decoration.
    Underline(LineStyle),
    /// Strikethrough decoration.
    Strikethrough(LineStyle),
    /// Hyperlink target, exactly as written in the markup.
    Link(String),
}

/// Identifies which attribute slot a [`TextAttribute`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    Underline,
    Strikethrough,
    Link,
}

impl TextAttribute {
    /// The attribute slot this value is written to.
    pub fn key(&self) -> AttributeKey {
        match self {
            TextAttribute::Font(_) => AttributeKey::Font,
            TextAttribute::ForegroundColor(_) => AttributeKey::ForegroundColor,
            TextAttribute::Underline(_) => AttributeKey::Underline,
            TextAttribute::Strikethrough(_) => AttributeKey::Strikethrough,
            TextAttribute::Link(_) => AttributeKey::Link,
        }
    }
}

/// One attribute assignment over a half-open byte range of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRange {
    /// Byte range into [`StyledText::text`].
    pub range: Range<usize>,
    /// The attribute applied over the range.
    pub attribute: TextAttribute,
}

/// The effective attributes at some position, after resolving overlaps.
///
/// `None` means no assignment touched that attribute, so the host's own
/// default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextAttributes {
    pub font: Option<Font>,
    pub foreground_color: Option<Color>,
    pub underline: Option<LineStyle>,
    pub strikethrough: Option<LineStyle>,
    pub link: Option<String>,
}

impl TextAttributes {
    /// Overwrite the slot written by `attribute`.
    pub fn apply(&mut self, attribute: &TextAttribute) {
        match attribute {
            TextAttribute::Font(font) => self.font = Some(font.clone()),
            TextAttribute::ForegroundColor(color) => self.foreground_color = Some(*color),
            TextAttribute::Underline(style) => self.underline = Some(*style),
            TextAttribute::Strikethrough(style) => self.strikethrough = Some(*style),
            TextAttribute::Link(target) => self.link = Some(target.clone()),
        }
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A maximal run of text sharing the same effective attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun<'a> {
    /// Byte range of the run.
    pub range: Range<usize>,
    /// The run's text.
    pub text: &'a str,
    /// Effective attributes over the whole run.
    pub attributes: TextAttributes,
}

/// Plain text plus ordered attribute assignments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    text: String,
    ranges: Vec<StyleRange>,
}

impl StyledText {
    /// Create styled text with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    /// Create unstyled text, used for the degrade-to-plaintext fallback.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text)
    }

    /// The plain text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All attribute assignments, in the order they were added.
    pub fn ranges(&self) -> &[StyleRange] {
        &self.ranges
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Assign `attribute` over `range`.
    ///
    /// The range must lie within the text and on character boundaries.
    pub fn add_attribute(&mut self, attribute: TextAttribute, range: Range<usize>) -> RenderResult<()> {
        if range.start > range.end
            || range.end > self.text.len()
            || !self.text.is_char_boundary(range.start)
            || !self.text.is_char_boundary(range.end)
        {
            return Err(RenderError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        self.ranges.push(StyleRange { range, attribute });
        Ok(())
    }

    /// Assign several attributes over the same range, in order.
    pub fn add_attributes(
        &mut self,
        attributes: impl IntoIterator<Item = TextAttribute>,
        range: Range<usize>,
    ) -> RenderResult<()> {
        for attribute in attributes {
            self.add_attribute(attribute, range.clone())?;
        }
        Ok(())
    }

    /// The effective attributes at byte `offset`.
    pub fn attributes_at(&self, offset: usize) -> TextAttributes {
        let mut attributes = TextAttributes::default();
        for style in &self.ranges {
            if style.range.contains(&offset) {
                attributes.apply(&style.attribute);
            }
        }
        attributes
    }

    /// The link target at byte `offset`, if any.
    pub fn link_at(&self, offset: usize) -> Option<&str> {
        self.ranges
            .iter()
            .rev()
            .find(|style| style.range.contains(&offset) && style.attribute.key() == AttributeKey::Link)
            .and_then(|style| match &style.attribute {
                TextAttribute::Link(target) => Some(target.as_str()),
                _ => None,
            })
    }

    /// Split the text into maximal runs of identical effective attributes.
    ///
    /// The runs cover the whole text in order; this is the form a host
    /// applies to its display buffer.
    pub fn runs(&self) -> Vec<StyledRun<'_>> {
        if self.text.is_empty() {
            return Vec::new();
        }

        let mut boundaries: Vec<usize> = Vec::with_capacity(self.ranges.len() * 2 + 2);
        boundaries.push(0);
        boundaries.push(self.text.len());
        for style in &self.ranges {
            boundaries.push(style.range.start);
            boundaries.push(style.range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut runs: Vec<StyledRun<'_>> = Vec::new();
        for window in boundaries.windows(2) {
            let (start, end) = (window[0], window[1]);
            let attributes = self.attributes_at(start);
            match runs.last_mut() {
                Some(last) if last.attributes == attributes => {
                    last.range.end = end;
                    last.text = &self.text[last.range.clone()];
                }
                _ => runs.push(StyledRun {
                    range: start..end,
                    text: &self.text[start..end],
                    attributes,
                }),
            }
        }
        runs
    }

    /// Convert a byte offset to a UTF-16 code unit offset.
    ///
    /// Returns `None` if the offset is out of bounds or not on a char boundary.
    pub fn utf16_offset(&self, byte_offset: usize) -> Option<usize> {
        if byte_offset > self.text.len() || !self.text.is_char_boundary(byte_offset) {
            return None;
        }
        Some(self.text[..byte_offset].encode_utf16().count())
    }

    /// Convert a UTF-16 code unit offset (as reported by many text widgets)
    /// back to a byte offset.
    pub fn byte_offset_from_utf16(&self, utf16_offset: usize) -> Option<usize> {
        let mut units = 0;
        for (byte_offset, ch) in self.text.char_indices() {
            if units == utf16_offset {
                return Some(byte_offset);
            }
            units += ch.len_utf16();
            if units > utf16_offset {
                return None;
            }
        }
        (units == utf16_offset).then_some(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> TextAttribute {
        TextAttribute::Font(Font::bold_system(14.0))
    }

    #[test]
    fn test_plain_text() {
        let styled = StyledText::plain("Hello, World!");
        assert_eq!(styled.text(), "Hello, World!");
        assert!(styled.ranges().is_empty());
        assert_eq!(styled.runs().len(), 1);
        assert!(styled.runs()[0].attributes.is_empty());
    }

    #[test]
    fn test_rejects_out_of_bounds_range() {
        let mut styled = StyledText::new("abc");
        assert!(matches!(
            styled.add_attribute(bold(), 1..4),
            Err(RenderError::InvalidRange { start: 1, end: 4, len: 3 })
        ));
        assert!(styled.ranges().is_empty());
    }

    #[test]
    fn test_rejects_split_character() {
        let mut styled = StyledText::new("héllo");
        assert!(styled.add_attribute(bold(), 0..2).is_err());
        assert!(styled.add_attribute(bold(), 0..3).is_ok());
    }

    #[test]
    fn test_later_assignment_wins_per_key() {
        let mut styled = StyledText::new("Hello world");
        styled.add_attribute(bold(), 0..11).unwrap();
        styled
            .add_attribute(TextAttribute::ForegroundColor(Color::RED), 0..11)
            .unwrap();
        styled
            .add_attribute(TextAttribute::Font(Font::italic_system(14.0)), 6..11)
            .unwrap();

        let start = styled.attributes_at(0);
        assert!(start.font.as_ref().unwrap().is_bold());
        assert_eq!(start.foreground_color, Some(Color::RED));

        let end = styled.attributes_at(8);
        assert!(end.font.as_ref().unwrap().is_italic());
        assert!(!end.font.as_ref().unwrap().is_bold());
        assert_eq!(end.foreground_color, Some(Color::RED));
    }

    #[test]
    fn test_runs_cover_text_and_merge() {
        let mut styled = StyledText::new("Hello bold world");
        styled.add_attribute(bold(), 6..10).unwrap();
        // Same value over an adjacent span merges into one run.
        styled.add_attribute(bold(), 10..11).unwrap();

        let runs = styled.runs();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "Hello ");
        assert_eq!(runs[1].text, "bold ");
        assert_eq!(runs[1].range, 6..11);
        assert_eq!(runs[2].text, "world");
        assert!(runs[2].attributes.is_empty());
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        assert!(StyledText::default().runs().is_empty());
    }

    #[test]
    fn test_link_at_prefers_latest() {
        let mut styled = StyledText::new("same");
        styled.add_attribute(TextAttribute::Link("A".into()), 0..4).unwrap();
        styled.add_attribute(TextAttribute::Link("B".into()), 0..4).unwrap();
        assert_eq!(styled.link_at(0), Some("B"));
        assert_eq!(styled.link_at(4), None);
    }

    #[test]
    fn test_utf16_offsets() {
        let styled = StyledText::new("a😀b");
        assert_eq!(styled.utf16_offset(0), Some(0));
        assert_eq!(styled.utf16_offset(1), Some(1));
        assert_eq!(styled.utf16_offset(5), Some(3));
        assert_eq!(styled.utf16_offset(2), None);
        assert_eq!(styled.byte_offset_from_utf16(3), Some(5));
        assert_eq!(styled.byte_offset_from_utf16(4), Some(6));
        assert_eq!(styled.byte_offset_from_utf16(2), None);
        assert_eq!(styled.byte_offset_from_utf16(9), None);
    }
}
