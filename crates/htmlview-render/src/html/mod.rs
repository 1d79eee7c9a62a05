//! HTML subset to styled text conversion.
//!
//! The pipeline has two stages:
//!
//! 1. [`parse_html`] turns markup into an [`HtmlDocument`], an arena of
//!    elements in document order with their flattened text.
//! 2. [`HtmlRenderer`] walks the body subtree and records font, color,
//!    decoration and link attributes over the matching spans of the
//!    document text, producing a [`StyledText`](crate::text::StyledText).
//!
//! ```
//! use htmlview_render::html::{render_html, FontSet};
//! use htmlview_render::Color;
//!
//! let styled = render_html("Hello <b>bold</b> and <i>italic</i> world!", &FontSet::new(), Color::BLACK);
//! assert_eq!(styled.text(), "Hello bold and italic world!");
//! assert!(styled.attributes_at(6).font.unwrap().is_bold());
//! ```

mod defaults;
mod mapper;
mod normalize;
mod parser;

pub use defaults::{FontSet, StyleDefaults};
pub use mapper::{render_html, HtmlRenderer, MatchStrategy, RenderOptions};
pub use normalize::{normalize_line_breaks, restore_line_breaks, LINE_BREAK_PLACEHOLDER};
pub use parser::{parse_html, Element, ElementId, HtmlDocument, ParseLimits};
