//! Theme colors for htmlview.
//!
//! The HTML renderer needs one color from the host theme: the "label" color
//! used for ordinary text when the host does not set one. [`ColorPalette`]
//! carries it as [`ColorPalette::text_primary`] for each built-in theme.
//!
//! ```
//! use htmlview_style::{ColorPalette, ThemeMode};
//!
//! let palette = ColorPalette::for_mode(ThemeMode::Dark);
//! assert_eq!(palette.label_color(), palette.text_primary);
//! ```

mod palette;

pub use palette::{ColorPalette, ThemeMode};
