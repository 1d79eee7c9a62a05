//! Font-related types and enumerations.

use std::fmt;

/// Font weight, typically ranging from 100 (thin) to 900 (black).
///
/// Common weight constants are provided for convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Thin weight (100).
    pub const THIN: Self = Self(100);
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Medium weight (500).
    pub const MEDIUM: Self = Self(500);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);
    /// Black/heavy weight (900).
    pub const BLACK: Self = Self(900);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Whether this weight renders as bold (600 and above).
    pub const fn is_bold(self) -> bool {
        self.0 >= Self::SEMI_BOLD.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u16> for FontWeight {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

/// Font style (normal, italic, or oblique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Normal upright style.
    #[default]
    Normal,
    /// Italic style (designed italic glyphs).
    Italic,
    /// Oblique style (slanted normal glyphs).
    Oblique,
}

/// Font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// The platform's UI font.
    #[default]
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Parse a CSS-style family name, mapping generic keywords to variants.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "sans-serif" | "system-ui" => Self::SansSerif,
            "monospace" => Self::Monospace,
            _ => Self::Name(name.trim().to_string()),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFamily::Name(name) => write!(f, "{}", name),
            FontFamily::Serif => write!(f, "serif"),
            FontFamily::SansSerif => write!(f, "sans-serif"),
            FontFamily::Monospace => write!(f, "monospace"),
        }
    }
}

/// Line style used for underline and strikethrough decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// A single thin line.
    #[default]
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
}
