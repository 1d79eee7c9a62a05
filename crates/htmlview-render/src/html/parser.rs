//! Markup parser: HTML string to an owned element tree.
//!
//! Parsing itself is delegated to `scraper` (html5ever's tree builder), which
//! never fails on malformed input: unclosed tags are closed, stray end tags
//! are dropped, and `html`/`head`/`body` are synthesized the way a browser
//! does. The resulting DOM is copied into an arena of [`Element`]s in
//! document order, each carrying its tag, attributes and parent index.
//!
//! Visible text is flattened once for the whole document; every element
//! records the byte range of its own text within it. The walk uses an
//! explicit stack, so nesting depth costs heap, not call stack.

use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use ego_tree::NodeRef;
use scraper::{Html, Node};

use htmlview_core::logging::{span_names, targets};

use crate::error::{RenderError, RenderResult};

/// Index of an element in an [`HtmlDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of the element in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A parsed element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// One past the last descendant, in document order.
    subtree_end: usize,
    depth: usize,
    /// Trimmed span of the element's text in [`HtmlDocument::text`].
    text: Range<usize>,
}

impl Element {
    /// Lowercased tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by (lowercase) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The parent element, `None` for the `html` root.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Nesting depth; the root `html` element has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Byte range of the element's flattened text within the document text.
    pub fn text_range(&self) -> Range<usize> {
        self.text.clone()
    }
}

/// Limits applied before and during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Largest accepted input, in bytes.
    pub max_input_bytes: usize,
    /// Deepest accepted element nesting.
    pub max_depth: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
            max_depth: 512,
        }
    }
}

impl ParseLimits {
    /// Set the maximum input size in bytes.
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Set the maximum element nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// A parsed document: elements in document order plus its flattened text.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlDocument {
    elements: Vec<Element>,
    body: Option<ElementId>,
    text: String,
}

impl HtmlDocument {
    /// The `body` element, if the document has one.
    pub fn body(&self) -> Option<ElementId> {
        self.body
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// The parent of `id`, if any.
    pub fn parent(&self, id: ElementId) -> Option<&Element> {
        self.element(id).parent.map(|parent| self.element(parent))
    }

    /// Every element of the document, in document order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().enumerate().map(|(i, e)| (ElementId(i), e))
    }

    /// `id` and all of its descendants, depth first, in document order.
    pub fn descendants(&self, id: ElementId) -> impl Iterator<Item = (ElementId, &Element)> {
        let end = self.element(id).subtree_end;
        (id.0..end).map(|i| (ElementId(i), &self.elements[i]))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Flattened visible text of the whole document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flattened visible text of `id` and its descendants.
    pub fn element_text(&self, id: ElementId) -> &str {
        &self.text[self.element(id).text.clone()]
    }
}

/// Parse `html` into an [`HtmlDocument`].
///
/// Malformed markup is repaired, never rejected. Errors only come from the
/// limits or from a fault inside the underlying parser.
pub fn parse_html(html: &str, limits: &ParseLimits) -> RenderResult<HtmlDocument> {
    let _span = tracing::debug_span!(target: targets::PARSER, span_names::PARSE, bytes = html.len()).entered();

    if html.len() > limits.max_input_bytes {
        return Err(RenderError::parse(
            "input too large",
            format!("{} bytes exceeds limit of {}", html.len(), limits.max_input_bytes),
        ));
    }

    let parsed = panic::catch_unwind(AssertUnwindSafe(|| Html::parse_document(html))).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!(target: targets::PARSER, %reason, "html parser panicked");
        RenderError::Internal(reason)
    })?;

    if !parsed.errors.is_empty() {
        tracing::debug!(
            target: targets::PARSER,
            count = parsed.errors.len(),
            first = %parsed.errors[0],
            "recovered from malformed markup"
        );
    }

    check_depth(&parsed, limits)?;
    let document = build_document(&parsed);
    tracing::debug!(
        target: targets::PARSER,
        elements = document.len(),
        has_body = document.body.is_some(),
        "parsed document"
    );
    Ok(document)
}

/// Reject documents whose element nesting exceeds `limits.max_depth`.
fn check_depth(parsed: &Html, limits: &ParseLimits) -> RenderResult<()> {
    // (node, depth of the next element found below it)
    let mut stack: Vec<(NodeRef<'_, Node>, usize)> = vec![(parsed.tree.root(), 0)];
    while let Some((node, depth)) = stack.pop() {
        let child_depth = if node.value().is_element() {
            if depth > limits.max_depth {
                return Err(RenderError::parse(
                    "markup nested too deeply",
                    format!("element depth {} exceeds limit of {}", depth, limits.max_depth),
                ));
            }
            depth + 1
        } else {
            depth
        };
        stack.extend(node.children().map(|child| (child, child_depth)));
    }
    Ok(())
}

/// One step of the pre-order walk in [`build_document`].
enum Step<'a> {
    Enter {
        node: NodeRef<'a, Node>,
        parent: Option<ElementId>,
        depth: usize,
        /// Inside `pre` or `textarea`.
        preserve: bool,
        /// Inside `script`, `style` or `template`.
        hidden: bool,
    },
    Leave {
        id: ElementId,
        /// Whether to separate the element from following text.
        pad_after: bool,
    },
}

/// Copy the DOM into an element arena and flatten its visible text.
///
/// Whitespace runs collapse to a single space, block elements and `br` are
/// separated from surrounding text by one space, `pre` and `textarea` keep
/// their whitespace, and every text is trimmed.
fn build_document(parsed: &Html) -> HtmlDocument {
    let mut elements: Vec<Element> = Vec::new();
    let mut body = None;
    let mut accum = String::new();

    let mut stack = vec![Step::Enter {
        node: parsed.tree.root(),
        parent: None,
        depth: 0,
        preserve: false,
        hidden: false,
    }];

    while let Some(step) = stack.pop() {
        match step {
            Step::Leave { id, pad_after } => {
                let subtree_end = elements.len();
                let element = &mut elements[id.0];
                element.text.end = accum.len();
                element.subtree_end = subtree_end;
                if pad_after && !ends_with_whitespace(&accum) {
                    accum.push(' ');
                }
            }
            Step::Enter {
                node,
                parent,
                depth,
                preserve,
                hidden,
            } => match node.value() {
                Node::Text(text) if !hidden => {
                    if preserve {
                        accum.push_str(text);
                    } else {
                        append_normalized(&mut accum, text);
                    }
                }
                Node::Element(el) => {
                    let name = el.name();
                    let hidden = hidden || is_hidden(name);
                    let block = is_block(name);
                    if !hidden && (block || name == "br") && !ends_with_whitespace(&accum) {
                        accum.push(' ');
                    }

                    let id = ElementId(elements.len());
                    let tag = name.to_ascii_lowercase();
                    if tag == "body" && body.is_none() {
                        body = Some(id);
                    }
                    elements.push(Element {
                        tag,
                        attributes: el
                            .attrs()
                            .map(|(name, value)| (name.to_ascii_lowercase(), value.to_string()))
                            .collect(),
                        parent,
                        children: Vec::new(),
                        subtree_end: id.0 + 1,
                        depth,
                        text: accum.len()..accum.len(),
                    });
                    if let Some(parent) = parent {
                        elements[parent.0].children.push(id);
                    }

                    let text_follows = node.next_sibling().is_some_and(|s| s.value().is_text());
                    stack.push(Step::Leave {
                        id,
                        pad_after: !hidden && block && text_follows,
                    });
                    let preserve = preserve || matches!(name, "pre" | "textarea");
                    for child in node.children().rev() {
                        stack.push(Step::Enter {
                            node: child,
                            parent: Some(id),
                            depth: depth + 1,
                            preserve,
                            hidden,
                        });
                    }
                }
                _ => {
                    for child in node.children().rev() {
                        stack.push(Step::Enter {
                            node: child,
                            parent,
                            depth,
                            preserve,
                            hidden,
                        });
                    }
                }
            },
        }
    }

    // Trim the document text, then rebase and trim every element span.
    let lead = accum.len() - accum.trim_start_matches(is_html_whitespace).len();
    let text = accum.trim_matches(is_html_whitespace).to_string();
    for element in &mut elements {
        let start = element.text.start.saturating_sub(lead).min(text.len());
        let end = element.text.end.saturating_sub(lead).clamp(start, text.len());
        element.text = trim_span(&text, start..end);
    }

    HtmlDocument { elements, body, text }
}

fn trim_span(text: &str, span: Range<usize>) -> Range<usize> {
    let slice = &text[span.clone()];
    let start = span.start + (slice.len() - slice.trim_start_matches(is_html_whitespace).len());
    start..start + slice.trim_matches(is_html_whitespace).len()
}

fn append_normalized(accum: &mut String, text: &str) {
    let mut strip_leading = ends_with_whitespace(accum);
    let mut last_was_white = false;
    for c in text.chars() {
        if is_html_whitespace(c) {
            if strip_leading || last_was_white {
                continue;
            }
            accum.push(' ');
            last_was_white = true;
        } else if !is_invisible(c) {
            accum.push(c);
            last_was_white = false;
            strip_leading = false;
        }
    }
}

fn ends_with_whitespace(accum: &str) -> bool {
    accum.is_empty() || accum.ends_with(' ')
}

fn is_html_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0c' | '\r')
}

/// Zero-width space and soft hyphen.
fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{00AD}')
}

fn is_hidden(name: &str) -> bool {
    matches!(name, "script" | "style" | "template")
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "html"
            | "head"
            | "body"
            | "title"
            | "address"
            | "article"
            | "aside"
            | "blockquote"
            | "center"
            | "dd"
            | "details"
            | "dir"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hgroup"
            | "hr"
            | "li"
            | "main"
            | "menu"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "tbody"
            | "td"
            | "tfoot"
            | "th"
            | "thead"
            | "tr"
            | "ul"
    )
}
