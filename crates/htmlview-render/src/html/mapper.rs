//! Style mapper: element tree to attributed text.
//!
//! Each element of the body subtree contributes attribute assignments over
//! the span of the document text where its own flattened text is found.
//! Assignments are added in document order, so an inner element overrides
//! its ancestors for any attribute both of them set.
//!
//! | tag              | font                                   | other            |
//! |------------------|----------------------------------------|------------------|
//! | `b`, `strong`    | bold, bold-italic inside `i`/`em`      | text color       |
//! | `i`, `em`        | italic, bold-italic inside `b`/`strong`| text color       |
//! | `u`              | regular                                | underline, color |
//! | `strike`         | regular                                | strikethrough, color |
//! | `a`              | bold                                   | link = `href`    |
//! | anything else    | regular                                | text color       |

use std::ops::Range;

use htmlview_core::logging::{span_names, targets};

use super::defaults::{FontSet, StyleDefaults};
use super::normalize::{normalize_line_breaks, restore_line_breaks};
use super::parser::{parse_html, ElementId, HtmlDocument, ParseLimits};
use crate::error::RenderResult;
use crate::text::{LineStyle, StyledText, TextAttribute};
use crate::types::Color;

/// How an element's text is located in the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Use the first occurrence anywhere in the document.
    ///
    /// Elements with identical text all resolve to the same (first) span,
    /// so `<a href="A">same</a><a href="B">same</a>` styles only the first
    /// "same", with link `B`.
    #[default]
    FirstOccurrence,
    /// Search inside the parent's span, after the previous sibling's span.
    ///
    /// Repeated text claims successive occurrences.
    Sequential,
}

/// Conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub match_strategy: MatchStrategy,
    pub limits: ParseLimits,
}

impl RenderOptions {
    /// Set the match strategy.
    pub fn match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = strategy;
        self
    }

    /// Set the parse limits.
    pub fn limits(mut self, limits: ParseLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Converts HTML snippets to [`StyledText`].
///
/// # Example
///
/// ```
/// use htmlview_render::html::{HtmlRenderer, StyleDefaults};
///
/// let renderer = HtmlRenderer::new(StyleDefaults::default());
/// let styled = renderer.render(r#"Read <a href="https://example.com">the docs</a>"#);
///
/// assert_eq!(styled.text(), "Read the docs");
/// assert_eq!(styled.link_at(6), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    defaults: StyleDefaults,
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a renderer with the given resolved defaults.
    pub fn new(defaults: StyleDefaults) -> Self {
        Self {
            defaults,
            options: RenderOptions::default(),
        }
    }

    /// Replace the conversion options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The resolved defaults.
    pub fn defaults(&self) -> &StyleDefaults {
        &self.defaults
    }

    /// The conversion options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Convert `html`, degrading to the error message as plain text on failure.
    pub fn render(&self, html: &str) -> StyledText {
        match self.try_render(html) {
            Ok(styled) => styled,
            Err(err) => {
                tracing::warn!(target: targets::MAPPER, error = %err, "html conversion failed, showing plain text");
                StyledText::plain(err.fallback_text())
            }
        }
    }

    /// Convert `html`, returning parser failures to the caller.
    pub fn try_render(&self, html: &str) -> RenderResult<StyledText> {
        let _span = tracing::debug_span!(target: targets::MAPPER, span_names::RENDER, bytes = html.len()).entered();
        let normalized = normalize_line_breaks(html);
        let document = parse_html(&normalized, &self.options.limits)?;

        let Some(body) = document.body() else {
            tracing::debug!(target: targets::MAPPER, "document has no body");
            return Ok(StyledText::new(restore_line_breaks(&normalized).into_owned()));
        };

        let mut styled = StyledText::new(restore_line_breaks(document.text()).into_owned());
        let resolved = match self.options.match_strategy {
            MatchStrategy::FirstOccurrence => first_occurrences(&document, body, styled.text()),
            MatchStrategy::Sequential => sequential_occurrences(&document, body, styled.text()),
        };

        for (id, range) in resolved {
            let element = document.element(id);
            let parent_tag = document.parent(id).map_or("", |parent| parent.tag());
            let attributes = self.attributes_for(element.tag(), parent_tag, element.attr("href"));
            tracing::trace!(
                target: targets::MAPPER,
                tag = element.tag(),
                parent = parent_tag,
                start = range.start,
                end = range.end,
                "styling element"
            );
            styled.add_attributes(attributes, range)?;
        }

        Ok(styled)
    }

    /// The attribute assignments for an element, in application order.
    pub fn attributes_for(&self, tag: &str, parent_tag: &str, href: Option<&str>) -> Vec<TextAttribute> {
        let d = &self.defaults;
        let color = TextAttribute::ForegroundColor(d.text_color);
        match tag {
            "b" | "strong" => {
                let font = if matches!(parent_tag, "i" | "em") {
                    &d.bold_italic
                } else {
                    &d.bold
                };
                vec![TextAttribute::Font(font.clone()), color]
            }
            "i" | "em" => {
                let font = if matches!(parent_tag, "b" | "strong") {
                    &d.bold_italic
                } else {
                    &d.italic
                };
                vec![TextAttribute::Font(font.clone()), color]
            }
            "u" => vec![
                TextAttribute::Font(d.regular.clone()),
                TextAttribute::Underline(LineStyle::Single),
                color,
            ],
            "strike" => vec![
                TextAttribute::Font(d.regular.clone()),
                TextAttribute::Strikethrough(LineStyle::Single),
                color,
            ],
            "a" => vec![
                TextAttribute::Font(d.bold.clone()),
                TextAttribute::Link(href.unwrap_or_default().to_string()),
            ],
            _ => vec![TextAttribute::Font(d.regular.clone()), color],
        }
    }
}

/// Convert `html` with the given font overrides and text color.
pub fn render_html(html: &str, fonts: &FontSet, text_color: Color) -> StyledText {
    HtmlRenderer::new(StyleDefaults::resolve(fonts, text_color)).render(html)
}

fn first_occurrences(document: &HtmlDocument, body: ElementId, text: &str) -> Vec<(ElementId, Range<usize>)> {
    document
        .descendants(body)
        .filter_map(|(id, _)| {
            let needle = restore_line_breaks(document.element_text(id));
            if needle.is_empty() {
                return None;
            }
            text.find(needle.as_ref())
                .map(|start| (id, start..start + needle.len()))
        })
        .collect()
}

/// An element whose children are still being claimed.
struct Claim {
    id: ElementId,
    next_child: usize,
    /// Where the next child's search starts.
    child_floor: usize,
    /// End of this element's own span, if it found one.
    end: Option<usize>,
}

/// Resolve each element at or after `floor`, then its children inside its
/// span, each child starting after the previous sibling's span.
fn sequential_occurrences(document: &HtmlDocument, body: ElementId, text: &str) -> Vec<(ElementId, Range<usize>)> {
    let mut resolved = Vec::new();
    let mut stack = vec![open_claim(document, body, 0, text, &mut resolved)];

    while let Some(top) = stack.last_mut() {
        match document.element(top.id).children().get(top.next_child) {
            Some(&child) => {
                top.next_child += 1;
                let floor = top.child_floor;
                let claim = open_claim(document, child, floor, text, &mut resolved);
                stack.push(claim);
            }
            None => {
                let done = stack.pop();
                if let (Some(end), Some(parent)) = (done.and_then(|c| c.end), stack.last_mut()) {
                    parent.child_floor = end;
                }
            }
        }
    }
    resolved
}

fn open_claim(
    document: &HtmlDocument,
    id: ElementId,
    floor: usize,
    text: &str,
    resolved: &mut Vec<(ElementId, Range<usize>)>,
) -> Claim {
    let needle = restore_line_breaks(document.element_text(id));
    let range = if needle.is_empty() {
        None
    } else {
        text[floor..]
            .find(needle.as_ref())
            .map(|i| floor + i..floor + i + needle.len())
    };

    if let Some(range) = &range {
        resolved.push((id, range.clone()));
    }

    Claim {
        id,
        next_child: 0,
        child_floor: range.as_ref().map_or(floor, |r| r.start),
        end: range.map(|r| r.end),
    }
}
