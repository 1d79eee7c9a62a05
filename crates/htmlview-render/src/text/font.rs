//! Font representation and configuration.

use super::types::{FontFamily, FontStyle, FontWeight};

/// A complete font specification including family, size, and styling.
///
/// `Font` describes the styling attributes to apply to a run of text. It does
/// not reference font data; the host widget resolves it to a concrete face.
///
/// # Example
///
/// ```
/// use htmlview_render::text::{Font, FontFamily, FontWeight, FontStyle};
///
/// let styled = Font::new(FontFamily::name("Inter"), 14.0)
///     .with_weight(FontWeight::MEDIUM)
///     .with_style(FontStyle::Italic);
/// assert_eq!(styled.family(), &FontFamily::name("Inter"));
/// assert!(styled.is_italic() && !styled.is_bold());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// The font family.
    family: FontFamily,
    /// Font size in points.
    size: f32,
    /// Font weight.
    weight: FontWeight,
    /// Font style.
    style: FontStyle,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// The platform UI font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new(FontFamily::SansSerif, size)
    }

    /// The bold platform UI font at the given size.
    pub fn bold_system(size: f32) -> Self {
        Self::system(size).with_weight(FontWeight::BOLD)
    }

    /// The italic platform UI font at the given size.
    pub fn italic_system(size: f32) -> Self {
        Self::system(size).with_style(FontStyle::Italic)
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Get the font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Whether the font renders bold.
    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }

    /// Whether the font renders slanted.
    pub fn is_italic(&self) -> bool {
        self.style != FontStyle::Normal
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }

    /// Create a copy of this font with a different style.
    pub fn with_style(&self, style: FontStyle) -> Self {
        let mut font = self.clone();
        font.style = style;
        font
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(super::SYSTEM_FONT_SIZE)
    }
}
