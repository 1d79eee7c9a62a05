//! Logging facilities for htmlview.
//!
//! htmlview uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("htmlview_render::html=debug")
//!         .init();
//! }
//! ```

/// Span names used throughout htmlview for tracing.
pub mod span_names {
    /// HTML to styled text conversion span.
    pub const RENDER: &str = "htmlview::render";
    /// Markup parsing span.
    pub const PARSE: &str = "htmlview::parse";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "htmlview_core::signal";
    /// Markup parser target.
    pub const PARSER: &str = "htmlview_render::html::parser";
    /// Style mapper target.
    pub const MAPPER: &str = "htmlview_render::html::mapper";
    /// Widget glue target.
    pub const WIDGET: &str = "htmlview::widget";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SIGNAL, targets::PARSER, targets::MAPPER, targets::WIDGET] {
            assert!(target.starts_with("htmlview"));
            assert!(target.contains("::"));
        }
    }

    #[test]
    fn test_span_names_distinct() {
        assert_ne!(span_names::RENDER, span_names::PARSE);
    }
}
