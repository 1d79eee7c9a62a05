//! Read-only text view that displays an HTML snippet as styled text.
//!
//! # Example
//!
//! ```
//! use htmlview::HtmlTextView;
//! use std::sync::{Arc, Mutex};
//!
//! let mut view = HtmlTextView::new();
//! view.set_html(r#"See <a href="/help">help</a>"#);
//! view.set_base_url(Some("https://example.com/".parse().unwrap()));
//!
//! let opened = Arc::new(Mutex::new(Vec::new()));
//! let sink = opened.clone();
//! view.link_activated.connect(move |target| sink.lock().unwrap().push(target.to_string()));
//!
//! // The host asks before following a tapped link; the view always says no.
//! assert!(!view.handle_link_interaction(5));
//! assert_eq!(*opened.lock().unwrap(), ["https://example.com/help"]);
//! ```

use url::Url;

use htmlview_core::logging::targets;
use htmlview_core::Signal;
use htmlview_render::html::{FontSet, HtmlRenderer, RenderOptions, StyleDefaults};
use htmlview_render::text::{Font, StyledText};
use htmlview_render::Color;
use htmlview_style::ColorPalette;

use super::LinkTarget;
use crate::config::HtmlTextConfig;
use crate::error::ConfigResult;

/// A non-editable view that shows converted HTML and relays link taps.
///
/// The view keeps the last HTML string it was given and re-renders it
/// whenever a font, color, palette or conversion option changes. The
/// displayed document is always replaced as a whole.
///
/// Fonts left unset fall back to the platform UI font at 14pt (bold and
/// italic variants as appropriate). With no explicit text color, the
/// palette's label color is used.
pub struct HtmlTextView {
    /// Last HTML given to [`set_html`](Self::set_html).
    html: String,

    font: Option<Font>,
    bold_font: Option<Font>,
    italic_font: Option<Font>,
    bold_italic_font: Option<Font>,
    text_color: Option<Color>,
    palette: ColorPalette,

    options: RenderOptions,
    /// Base for relative link targets.
    base_url: Option<Url>,

    /// Currently displayed content.
    document: StyledText,

    /// Signal emitted with the new HTML after [`set_html`](Self::set_html).
    pub html_changed: Signal<String>,

    /// Signal emitted with the target when a link is activated.
    pub link_activated: Signal<LinkTarget>,
}

impl Default for HtmlTextView {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HtmlTextView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlTextView")
            .field("html", &self.html)
            .field("text", &self.document.text())
            .field("options", &self.options)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HtmlTextView {
    /// Create an empty view with default fonts and the light palette.
    pub fn new() -> Self {
        Self {
            html: String::new(),
            font: None,
            bold_font: None,
            italic_font: None,
            bold_italic_font: None,
            text_color: None,
            palette: ColorPalette::default(),
            options: RenderOptions::default(),
            base_url: None,
            document: StyledText::default(),
            html_changed: Signal::new(),
            link_activated: Signal::new(),
        }
    }

    /// Create a view from a loaded configuration.
    ///
    /// Fails if a configured color, theme, font size or base URL is invalid.
    pub fn from_config(config: &HtmlTextConfig) -> ConfigResult<Self> {
        let fonts = config.fonts()?;
        let mut view = Self::new();
        view.font = fonts.regular;
        view.bold_font = fonts.bold;
        view.italic_font = fonts.italic;
        view.bold_italic_font = fonts.bold_italic;
        view.text_color = config.text_color()?;
        view.palette = config.palette()?;
        view.options = config.render_options();
        view.base_url = config.base_url()?;
        Ok(view)
    }

    /// Set the HTML using builder pattern.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self.rerender();
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The last HTML string given to the view.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the displayed content with `html`.
    ///
    /// Conversion never fails: markup the parser rejects is shown as its
    /// error message in plain text.
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
        self.rerender();
        self.html_changed.emit(self.html.clone());
    }

    /// The displayed styled text.
    pub fn document(&self) -> &StyledText {
        &self.document
    }

    /// The displayed text without attributes.
    pub fn text(&self) -> &str {
        self.document.text()
    }

    /// The raw link target covering byte `offset` of the displayed text.
    pub fn link_at(&self, offset: usize) -> Option<&str> {
        self.document.link_at(offset)
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// The font for unstyled text, if overridden.
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// Override the font for unstyled text (`None` restores the system font).
    pub fn set_font(&mut self, font: Option<Font>) {
        if self.font != font {
            self.font = font;
            self.rerender();
        }
    }

    /// Set the regular font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self.rerender();
        self
    }

    /// The font for bold text and links, if overridden.
    pub fn bold_font(&self) -> Option<&Font> {
        self.bold_font.as_ref()
    }

    /// Override the font for bold text and links.
    pub fn set_bold_font(&mut self, font: Option<Font>) {
        if self.bold_font != font {
            self.bold_font = font;
            self.rerender();
        }
    }

    /// The font for italic text, if overridden.
    pub fn italic_font(&self) -> Option<&Font> {
        self.italic_font.as_ref()
    }

    /// Override the font for italic text.
    pub fn set_italic_font(&mut self, font: Option<Font>) {
        if self.italic_font != font {
            self.italic_font = font;
            self.rerender();
        }
    }

    /// The font for bold nested in italic (or the reverse), if overridden.
    pub fn bold_italic_font(&self) -> Option<&Font> {
        self.bold_italic_font.as_ref()
    }

    /// Override the bold-italic font. Unset, bold-italic text uses the bold font.
    pub fn set_bold_italic_font(&mut self, font: Option<Font>) {
        if self.bold_italic_font != font {
            self.bold_italic_font = font;
            self.rerender();
        }
    }

    /// The explicit text color, if set.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Set the text color (`None` uses the palette's label color).
    pub fn set_text_color(&mut self, color: Option<Color>) {
        if self.text_color != color {
            self.text_color = color;
            self.rerender();
        }
    }

    /// Set text color using builder pattern.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self.rerender();
        self
    }

    /// The color applied to unlinked text.
    pub fn effective_text_color(&self) -> Color {
        self.text_color.unwrap_or_else(|| self.palette.label_color())
    }

    /// The theme palette.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Replace the theme palette.
    pub fn set_palette(&mut self, palette: ColorPalette) {
        if self.palette != palette {
            self.palette = palette;
            self.rerender();
        }
    }

    // =========================================================================
    // Conversion and links
    // =========================================================================

    /// The conversion options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace the conversion options.
    pub fn set_options(&mut self, options: RenderOptions) {
        if self.options != options {
            self.options = options;
            self.rerender();
        }
    }

    /// The base for relative link targets.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Set the base for relative link targets.
    pub fn set_base_url(&mut self, base_url: Option<Url>) {
        self.base_url = base_url;
    }

    /// Resolve a link target against the base URL.
    pub fn resolve_link(&self, href: &str) -> Result<Url, url::ParseError> {
        match Url::parse(href) {
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(href),
                None => Err(url::ParseError::RelativeUrlWithoutBase),
            },
            result => result,
        }
    }

    /// Handle activation of the text at byte `offset`.
    ///
    /// If a link covers `offset`, its target is emitted on
    /// [`link_activated`](Self::link_activated), resolved against the base
    /// URL when possible and raw otherwise. Always returns `false`: the host
    /// must not perform its own navigation.
    pub fn handle_link_interaction(&self, offset: usize) -> bool {
        let Some(href) = self.document.link_at(offset) else {
            return false;
        };

        let url = match self.resolve_link(href) {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::debug!(target: targets::WIDGET, href, error = %err, "link target left unresolved");
                None
            }
        };
        let target = LinkTarget::new(href, url);
        tracing::debug!(target: targets::WIDGET, link = %target, "link activated");
        self.link_activated.emit(target);
        false
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn renderer(&self) -> HtmlRenderer {
        let fonts = FontSet {
            regular: self.font.clone(),
            bold: self.bold_font.clone(),
            italic: self.italic_font.clone(),
            bold_italic: self.bold_italic_font.clone(),
        };
        let defaults = StyleDefaults::resolve(&fonts, self.effective_text_color());
        HtmlRenderer::new(defaults).with_options(self.options)
    }

    fn rerender(&mut self) {
        self.document = self.renderer().render(&self.html);
    }
}
