//! Text model for htmlview.
//!
//! This module provides the font description types and the attributed text
//! container ([`StyledText`]) that the HTML style mapper fills in and the host
//! widget displays.
//!
//! ```
//! use htmlview_render::text::{Font, FontWeight, StyledText, TextAttribute};
//!
//! let mut styled = StyledText::new("Hello bold");
//! styled.add_attribute(TextAttribute::Font(Font::system(14.0).with_weight(FontWeight::BOLD)), 6..10)?;
//!
//! for run in styled.runs() {
//!     println!("{:?} -> {:?}", run.text, run.attributes.font);
//! }
//! # Ok::<(), htmlview_render::RenderError>(())
//! ```

mod font;
mod styled_text;
mod types;

pub use font::Font;
pub use styled_text::{AttributeKey, StyleRange, StyledRun, StyledText, TextAttribute, TextAttributes};
pub use types::{FontFamily, FontStyle, FontWeight, LineStyle};

/// Point size of the built-in system fonts used when the host supplies none.
pub const SYSTEM_FONT_SIZE: f32 = 14.0;
