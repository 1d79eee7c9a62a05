//! Host-supplied fonts and their built-in fallbacks.

use crate::text::{Font, SYSTEM_FONT_SIZE};
use crate::types::Color;

/// Optional font overrides supplied by the host widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontSet {
    /// Font for unstyled text.
    pub regular: Option<Font>,
    /// Font for `b`/`strong` and links.
    pub bold: Option<Font>,
    /// Font for `i`/`em`.
    pub italic: Option<Font>,
    /// Font for bold nested directly in italic (or the reverse).
    pub bold_italic: Option<Font>,
}

impl FontSet {
    /// A font set with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regular font.
    pub fn regular(mut self, font: Font) -> Self {
        self.regular = Some(font);
        self
    }

    /// Set the bold font.
    pub fn bold(mut self, font: Font) -> Self {
        self.bold = Some(font);
        self
    }

    /// Set the italic font.
    pub fn italic(mut self, font: Font) -> Self {
        self.italic = Some(font);
        self
    }

    /// Set the bold-italic font.
    pub fn bold_italic(mut self, font: Font) -> Self {
        self.bold_italic = Some(font);
        self
    }
}

/// Fonts and color resolved once per conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefaults {
    pub regular: Font,
    pub bold: Font,
    pub italic: Font,
    pub bold_italic: Font,
    pub text_color: Color,
}

impl StyleDefaults {
    /// Fill every unset font with its system fallback.
    ///
    /// There is no dedicated bold-italic system font: without an override,
    /// bold-italic text uses the bold system font.
    pub fn resolve(fonts: &FontSet, text_color: Color) -> Self {
        Self {
            regular: fonts
                .regular
                .clone()
                .unwrap_or_else(|| Font::system(SYSTEM_FONT_SIZE)),
            bold: fonts
                .bold
                .clone()
                .unwrap_or_else(|| Font::bold_system(SYSTEM_FONT_SIZE)),
            italic: fonts
                .italic
                .clone()
                .unwrap_or_else(|| Font::italic_system(SYSTEM_FONT_SIZE)),
            bold_italic: fonts
                .bold_italic
                .clone()
                .unwrap_or_else(|| Font::bold_system(SYSTEM_FONT_SIZE)),
            text_color,
        }
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self::resolve(&FontSet::default(), Color::BLACK)
    }
}
