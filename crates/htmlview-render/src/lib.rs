//! HTML to styled text conversion for htmlview.
//!
//! This crate turns short HTML snippets (comments, descriptions, chat
//! messages) into attributed text a native text widget can display directly:
//! one plain string plus per-range font, color, underline, strikethrough and
//! link attributes.
//!
//! # Getting Started
//!
//! ```
//! use htmlview_render::html::{FontSet, HtmlRenderer, StyleDefaults};
//! use htmlview_render::text::LineStyle;
//! use htmlview_render::Color;
//!
//! let defaults = StyleDefaults::resolve(&FontSet::new(), Color::BLACK);
//! let renderer = HtmlRenderer::new(defaults);
//!
//! let styled = renderer.render("Say <u>hello</u><br>to <a href=\"https://example.com\">us</a>");
//! assert_eq!(styled.text(), "Say hello\nto us");
//! assert_eq!(styled.attributes_at(4).underline, Some(LineStyle::Single));
//! assert_eq!(styled.link_at(13), Some("https://example.com"));
//!
//! for run in styled.runs() {
//!     println!("{:?}: {:?}", run.text, run.attributes);
//! }
//! ```
//!
//! # Failure Handling
//!
//! Malformed markup is repaired by the parser. The only failures are the
//! configured [`html::ParseLimits`] and faults inside the parser; in both
//! cases [`html::HtmlRenderer::render`] returns the error message as plain
//! text instead of failing. Use [`html::HtmlRenderer::try_render`] to see the
//! error.

mod error;
pub mod html;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use types::Color;

static_assertions::assert_impl_all!(text::StyledText: Send, Sync);
static_assertions::assert_impl_all!(html::HtmlRenderer: Send, Sync);
