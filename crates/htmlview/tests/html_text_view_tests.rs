//! Integration tests for HtmlTextView: conversion, link relay and configuration.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use url::Url;

use htmlview::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn record_links(view: &HtmlTextView) -> Arc<Mutex<Vec<String>>> {
    let links = Arc::new(Mutex::new(Vec::new()));
    let sink = links.clone();
    view.link_activated.connect(move |target| sink.lock().push(target.to_string()));
    links
}

fn view(html: &str) -> HtmlTextView {
    let mut view = HtmlTextView::new();
    view.set_html(html);
    view
}

// =========================================================================
// Conversion
// =========================================================================

#[test]
fn tag_free_text_is_verbatim_with_document_default() {
    let view = view("Just some text.");
    assert_eq!(view.text(), "Just some text.");

    let ranges = view.document().ranges();
    assert_eq!(ranges.len(), 2);
    assert!(ranges.iter().all(|style| style.range == (0..15)));

    let runs = view.document().runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].attributes.font, Some(Font::system(14.0)));
    assert_eq!(runs[0].attributes.foreground_color, Some(ColorPalette::light().text_primary));
}

#[test]
fn line_breaks_keep_offsets() {
    let view = view("one<BR>two <i>three</i><br />four");
    assert_eq!(view.text(), "one\ntwo three\nfour");
    assert!(view.document().attributes_at(8).font.unwrap().is_italic());
    assert!(!view.document().attributes_at(14).font.unwrap().is_italic());
    assert_eq!(&view.text()[14..], "four");
}

#[test]
fn bold_italic_either_nesting() {
    let bold_italic = Font::system(16.0)
        .with_weight(FontWeight::BOLD)
        .with_style(FontStyle::Italic);
    let mut view = HtmlTextView::new();
    view.set_bold_italic_font(Some(bold_italic.clone()));

    view.set_html("<b><i>text</i></b>");
    assert_eq!(view.document().attributes_at(0).font, Some(bold_italic.clone()));

    view.set_html("<i><b>text</b></i>");
    assert_eq!(view.document().attributes_at(0).font, Some(bold_italic));
}

#[test]
fn link_is_bold_with_target() {
    let view = view(r#"Go <a href="https://x">label</a>"#);
    let attrs = view.document().attributes_at(3);
    assert_eq!(attrs.link.as_deref(), Some("https://x"));
    assert!(attrs.font.unwrap().is_bold());
    assert_eq!(view.link_at(2), None);
}

#[test]
fn underline_keeps_regular_font() {
    let view = view("<u>under</u>");
    let attrs = view.document().attributes_at(0);
    assert_eq!(attrs.underline, Some(LineStyle::Single));
    assert_eq!(attrs.font, Some(Font::system(14.0)));
}

#[test]
fn unclosed_tags_recover() {
    let view = view("<b>bold text");
    assert_eq!(view.text(), "bold text");
    assert!(view.document().attributes_at(5).font.unwrap().is_bold());
}

#[test]
fn conversion_is_idempotent() {
    let html = r#"<p>A <b>b <i>c</i></b> <s>d</s> <strike>e</strike> <a href="/f">f</a></p>"#;
    let first = view(html);
    let mut second = view(html);
    second.set_html(html);
    assert_eq!(first.document(), second.document());
}

#[test]
fn oversized_input_shows_error_text() {
    let mut view = HtmlTextView::new();
    view.set_options(RenderOptions::default().limits(ParseLimits::default().max_input_bytes(4)));
    view.set_html("<b>hello</b>");
    assert_eq!(view.text(), "input too large");
    assert!(view.document().ranges().is_empty());
    assert_eq!(view.html(), "<b>hello</b>");
}

// =========================================================================
// Link relay
// =========================================================================

#[test]
fn link_activation_emits_and_suppresses_navigation() {
    init_tracing();
    let view = view(r#"See <a href="https://example.com/a">this</a> page"#);
    let links = record_links(&view);

    assert!(!view.handle_link_interaction(5));
    assert!(!view.handle_link_interaction(0));
    assert!(!view.handle_link_interaction(100));
    assert_eq!(*links.lock(), ["https://example.com/a"]);
}

#[test]
fn relative_links_resolve_against_base() {
    init_tracing();
    let mut view = view(r#"<a href="../up">up</a> <a href="">self</a>"#);
    let links = record_links(&view);

    assert!(!view.handle_link_interaction(0));
    assert!(!view.handle_link_interaction(3));
    assert_eq!(*links.lock(), ["../up", ""]);

    links.lock().clear();
    view.set_base_url(Some(Url::parse("https://example.com/a/b/").unwrap()));
    view.handle_link_interaction(0);
    view.handle_link_interaction(3);
    assert_eq!(*links.lock(), ["https://example.com/a/up", "https://example.com/a/b/"]);
}

#[test]
fn relative_link_reaches_host_unresolved() {
    let view = view(r#"by <a href="/users/42">bob</a>"#);
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = delivered.clone();
    view.link_activated.connect(move |target: &LinkTarget| sink.lock().push(target.clone()));

    assert!(!view.handle_link_interaction(4));
    let delivered = delivered.lock();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].href, "/users/42");
    assert!(!delivered[0].is_resolved());
}

#[test]
fn duplicate_links_share_first_span() {
    let mut view = view(r#"<a href="https://a.test/">same</a><a href="https://b.test/">same</a>"#);
    let links = record_links(&view);

    view.handle_link_interaction(1);
    view.handle_link_interaction(5);
    assert_eq!(*links.lock(), ["https://b.test/"]);

    view.set_options(RenderOptions::default().match_strategy(MatchStrategy::Sequential));
    links.lock().clear();
    view.handle_link_interaction(1);
    view.handle_link_interaction(5);
    assert_eq!(*links.lock(), ["https://a.test/", "https://b.test/"]);
}

#[test]
fn scoped_connection_stops_receiving() {
    let view = view(r#"<a href="https://example.com">x</a>"#);
    let hits = Arc::new(Mutex::new(0));
    {
        let counter = hits.clone();
        let _guard = view.link_activated.connect_scoped(move |_| *counter.lock() += 1);
        view.handle_link_interaction(0);
    }
    view.handle_link_interaction(0);
    assert_eq!(*hits.lock(), 1);
    assert_eq!(view.link_activated.connection_count(), 0);
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn view_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
font_family = "serif"
font_size = 12.0
text_color = "#00F"
match_strategy = "sequential"
base_url = "https://example.com/docs/"

[limits]
max_depth = 16
"##
    )
    .unwrap();

    let config = HtmlTextConfig::load(file.path()).unwrap();
    let mut view = HtmlTextView::from_config(&config).unwrap();
    assert_eq!(view.options().limits.max_depth, 16);

    view.set_html(r#"<em>x</em> <a href="intro">x</a>"#);
    let italic = view.document().attributes_at(0).font.unwrap();
    assert_eq!(italic.family(), &FontFamily::Serif);
    assert!(italic.is_italic());
    assert_eq!(italic.size(), 12.0);
    assert_eq!(view.document().attributes_at(0).foreground_color, Some(Color::BLUE));

    let links = record_links(&view);
    view.handle_link_interaction(2);
    assert_eq!(*links.lock(), ["https://example.com/docs/intro"]);
}

#[test]
fn dark_theme_sets_label_color() {
    let config = HtmlTextConfig::from_toml_str("theme = \"dark\"").unwrap();
    let mut view = HtmlTextView::from_config(&config).unwrap();
    view.set_html("hi");
    assert_eq!(view.document().attributes_at(0).foreground_color, Some(Color::WHITE));
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = HtmlTextConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_config_values_fail_view_creation() {
    let config = HtmlTextConfig::from_toml_str("text_color = \"#XYZ\"").unwrap();
    assert!(matches!(HtmlTextView::from_config(&config), Err(ConfigError::InvalidColor(_))));

    let config = HtmlTextConfig::from_toml_str("base_url = \"not a url\"").unwrap();
    assert!(matches!(HtmlTextView::from_config(&config), Err(ConfigError::InvalidUrl { .. })));
}
