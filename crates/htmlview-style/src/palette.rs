//! Color palette definitions.

use htmlview_render::Color;

/// Which built-in palette to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl ThemeMode {
    /// Parse a mode name (`light`, `dark`, `high-contrast`), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "high-contrast" | "high_contrast" => Some(Self::HighContrast),
            _ => None,
        }
    }
}

/// Theme colors the renderer draws from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Primary text color (the "label" color).
    pub text_primary: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub fn light() -> Self {
        Self {
            text_primary: Color::from_rgb8(0x21, 0x25, 0x29),
        }
    }

    /// Create a dark theme palette.
    pub fn dark() -> Self {
        Self {
            text_primary: Color::WHITE,
        }
    }

    /// Create a high-contrast palette.
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::BLACK,
        }
    }

    /// The palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::HighContrast => Self::high_contrast(),
        }
    }

    /// The default color for ordinary text.
    pub fn label_color(&self) -> Color {
        self.text_primary
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(ColorPalette::default(), ColorPalette::light());
        assert_eq!(ColorPalette::for_mode(ThemeMode::default()), ColorPalette::light());
    }

    #[test]
    fn label_color_per_mode() {
        assert_eq!(ColorPalette::light().label_color(), Color::from_rgb8(0x21, 0x25, 0x29));
        assert_eq!(ColorPalette::for_mode(ThemeMode::Dark).label_color(), Color::WHITE);
        assert_eq!(ColorPalette::for_mode(ThemeMode::HighContrast).label_color(), Color::BLACK);
    }

    #[test]
    fn mode_names() {
        assert_eq!(ThemeMode::from_name("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("high-contrast"), Some(ThemeMode::HighContrast));
        assert_eq!(ThemeMode::from_name("sepia"), None);
    }
}
