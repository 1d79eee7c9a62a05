//! TOML configuration for [`HtmlTextView`](crate::HtmlTextView).
//!
//! Every key is optional; an empty file yields the same view as
//! [`HtmlTextView::new`](crate::HtmlTextView::new).
//!
//! ```toml
//! font_family = "Helvetica"
//! font_size = 16.0
//! text_color = "#333333"
//! theme = "dark"
//! match_strategy = "sequential"
//! base_url = "https://example.com/docs/"
//!
//! [limits]
//! max_input_bytes = 65536
//! max_depth = 64
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use htmlview_core::logging::targets;
use htmlview_render::html::{FontSet, MatchStrategy, ParseLimits, RenderOptions};
use htmlview_render::text::{Font, FontFamily, FontStyle, FontWeight, SYSTEM_FONT_SIZE};
use htmlview_render::Color;
use htmlview_style::{ColorPalette, ThemeMode};

use crate::error::{ConfigError, ConfigResult};

/// Settings for an [`HtmlTextView`](crate::HtmlTextView), usually read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlTextConfig {
    /// Font family for all text; the platform UI font when unset.
    pub font_family: Option<String>,
    /// Font size in points.
    pub font_size: Option<f32>,
    /// Text color as a hex literal; the theme's label color when unset.
    pub text_color: Option<String>,
    /// `light`, `dark` or `high-contrast`.
    pub theme: Option<String>,
    pub match_strategy: MatchStrategySetting,
    /// Base for resolving relative link targets.
    pub base_url: Option<String>,
    pub limits: LimitsConfig,
}

/// Serialized form of [`MatchStrategy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategySetting {
    #[default]
    FirstOccurrence,
    Sequential,
}

impl From<MatchStrategySetting> for MatchStrategy {
    fn from(setting: MatchStrategySetting) -> Self {
        match setting {
            MatchStrategySetting::FirstOccurrence => MatchStrategy::FirstOccurrence,
            MatchStrategySetting::Sequential => MatchStrategy::Sequential,
        }
    }
}

/// Serialized form of [`ParseLimits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_input_bytes: usize,
    pub max_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = ParseLimits::default();
        Self {
            max_input_bytes: limits.max_input_bytes,
            max_depth: limits.max_depth,
        }
    }
}

impl From<LimitsConfig> for ParseLimits {
    fn from(config: LimitsConfig) -> Self {
        ParseLimits::default()
            .max_input_bytes(config.max_input_bytes)
            .max_depth(config.max_depth)
    }
}

impl HtmlTextConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(target: targets::WIDGET, path = %path.display(), "loaded view configuration");
        Ok(config)
    }

    /// The font overrides described by `font_family` and `font_size`.
    ///
    /// With neither key set, no fonts are overridden and the system
    /// fallbacks apply.
    pub fn fonts(&self) -> ConfigResult<FontSet> {
        if self.font_family.is_none() && self.font_size.is_none() {
            return Ok(FontSet::new());
        }

        let size = self.font_size.unwrap_or(SYSTEM_FONT_SIZE);
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::InvalidFontSize(size));
        }
        let family = self
            .font_family
            .as_deref()
            .map_or(FontFamily::SansSerif, FontFamily::parse);

        let regular = Font::new(family, size);
        let bold = regular.with_weight(FontWeight::BOLD);
        let italic = regular.with_style(FontStyle::Italic);
        let bold_italic = bold.with_style(FontStyle::Italic);
        Ok(FontSet::new()
            .regular(regular)
            .bold(bold)
            .italic(italic)
            .bold_italic(bold_italic))
    }

    /// The explicit text color, if one is configured.
    pub fn text_color(&self) -> ConfigResult<Option<Color>> {
        self.text_color
            .as_deref()
            .map(|hex| Color::from_hex(hex).ok_or_else(|| ConfigError::InvalidColor(hex.to_string())))
            .transpose()
    }

    /// The palette for the configured theme (light when unset).
    pub fn palette(&self) -> ConfigResult<ColorPalette> {
        let mode = match self.theme.as_deref() {
            None => ThemeMode::default(),
            Some(name) => ThemeMode::from_name(name).ok_or_else(|| ConfigError::InvalidTheme(name.to_string()))?,
        };
        Ok(ColorPalette::for_mode(mode))
    }

    /// Conversion options.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .match_strategy(self.match_strategy.into())
            .limits(self.limits.into())
    }

    /// The parsed base URL, if one is configured.
    pub fn base_url(&self) -> ConfigResult<Option<Url>> {
        self.base_url
            .as_deref()
            .map(|url| {
                Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
                    url: url.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        let config = HtmlTextConfig::from_toml_str("").unwrap();
        assert_eq!(config, HtmlTextConfig::default());
        assert_eq!(config.fonts().unwrap(), FontSet::new());
        assert_eq!(config.text_color().unwrap(), None);
        assert_eq!(config.palette().unwrap(), ColorPalette::light());
        assert_eq!(config.render_options(), RenderOptions::default());
        assert_eq!(config.base_url().unwrap(), None);
    }

    #[test]
    fn full_config() {
        let config = HtmlTextConfig::from_toml_str(
            r##"
            font_family = "Georgia"
            font_size = 18.0
            text_color = "#FF0000"
            theme = "high-contrast"
            match_strategy = "sequential"
            base_url = "https://example.com/docs/"

            [limits]
            max_depth = 32
            "##,
        )
        .unwrap();

        let fonts = config.fonts().unwrap();
        let regular = fonts.regular.unwrap();
        assert_eq!(regular.family(), &FontFamily::name("Georgia"));
        assert_eq!(regular.size(), 18.0);
        assert!(fonts.bold.unwrap().is_bold());
        let bold_italic = fonts.bold_italic.unwrap();
        assert!(bold_italic.is_bold() && bold_italic.is_italic());

        assert_eq!(config.text_color().unwrap(), Some(Color::RED));
        assert_eq!(config.palette().unwrap(), ColorPalette::high_contrast());

        let options = config.render_options();
        assert_eq!(options.match_strategy, MatchStrategy::Sequential);
        assert_eq!(options.limits.max_depth, 32);
        assert_eq!(options.limits.max_input_bytes, ParseLimits::default().max_input_bytes);

        assert_eq!(config.base_url().unwrap().unwrap().as_str(), "https://example.com/docs/");
    }

    #[test]
    fn size_without_family_uses_system_family() {
        let config = HtmlTextConfig::from_toml_str("font_size = 12.0").unwrap();
        let fonts = config.fonts().unwrap();
        assert_eq!(fonts.regular.unwrap(), Font::system(12.0));
    }

    #[test]
    fn invalid_values() {
        let config = HtmlTextConfig::from_toml_str("text_color = \"blue\"").unwrap();
        assert!(matches!(config.text_color(), Err(ConfigError::InvalidColor(c)) if c == "blue"));

        let config = HtmlTextConfig::from_toml_str("theme = \"sepia\"").unwrap();
        assert!(matches!(config.palette(), Err(ConfigError::InvalidTheme(_))));

        let config = HtmlTextConfig::from_toml_str("font_size = -3.0").unwrap();
        assert!(matches!(config.fonts(), Err(ConfigError::InvalidFontSize(_))));

        let config = HtmlTextConfig::from_toml_str("base_url = \"docs/\"").unwrap();
        assert!(matches!(config.base_url(), Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn shape_errors() {
        assert!(matches!(
            HtmlTextConfig::from_toml_str("match_strategy = \"random\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(HtmlTextConfig::from_toml_str("colour = \"#000\""), Err(ConfigError::Toml(_))));
        assert!(matches!(HtmlTextConfig::from_toml_str("font_size = "), Err(ConfigError::Toml(_))));
    }
}
