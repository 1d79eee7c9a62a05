//! Widgets that display converted HTML.

mod html_text_view;
mod link;

pub use html_text_view::HtmlTextView;
pub use link::LinkTarget;
