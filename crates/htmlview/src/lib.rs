//! htmlview: display short HTML snippets as styled, link-aware text.
//!
//! Markup such as comments, descriptions and chat messages is converted to
//! a single plain string plus per-range font, color, underline,
//! strikethrough and link attributes, which a native text widget can draw
//! directly. Link taps are relayed to the host instead of being followed.
//!
//! # Crates
//!
//! - `htmlview-core`: signals and logging targets
//! - `htmlview-render`: HTML parsing and the styled-text model
//! - `htmlview-style`: theme palettes
//!
//! The commonly used types of all three are re-exported from [`prelude`].
//!
//! # Example
//!
//! ```
//! use htmlview::prelude::*;
//!
//! let mut view = HtmlTextView::new();
//! view.set_html("Hello <b>bold</b> and <i>italic</i> world!");
//!
//! assert_eq!(view.text(), "Hello bold and italic world!");
//! assert!(view.document().attributes_at(6).font.unwrap().is_bold());
//! ```
//!
//! # Configuration
//!
//! A view can be built from a TOML file; see [`HtmlTextConfig`].
//!
//! ```no_run
//! use htmlview::{HtmlTextConfig, HtmlTextView};
//!
//! let config = HtmlTextConfig::load("htmlview.toml")?;
//! let view = HtmlTextView::from_config(&config)?;
//! # Ok::<(), htmlview::ConfigError>(())
//! ```

pub mod config;
mod error;
pub mod prelude;
pub mod widget;

pub use config::HtmlTextConfig;
pub use error::{ConfigError, ConfigResult};
pub use widget::{HtmlTextView, LinkTarget};

static_assertions::assert_impl_all!(HtmlTextView: Send, Sync);
