//! Prelude module for htmlview.
//!
//! ```
//! use htmlview::prelude::*;
//! ```

// ============================================================================
// Widget and Configuration
// ============================================================================

pub use crate::{ConfigError, HtmlTextConfig, HtmlTextView, LinkTarget};

// ============================================================================
// Signals
// ============================================================================

pub use htmlview_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Conversion
// ============================================================================

pub use htmlview_render::html::{render_html, FontSet, HtmlRenderer, MatchStrategy, ParseLimits, RenderOptions, StyleDefaults};
pub use htmlview_render::{Color, RenderError};

// ============================================================================
// Styled Text
// ============================================================================

pub use htmlview_render::text::{
    Font, FontFamily, FontStyle, FontWeight, LineStyle, StyledRun, StyledText, TextAttribute, TextAttributes,
};

// ============================================================================
// Theme
// ============================================================================

pub use htmlview_style::{ColorPalette, ThemeMode};
