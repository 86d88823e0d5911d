//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Every lookup returns an explicit
//! `Option`; the `required_*` variants turn absence into
//! [`Error::MalformedDocument`](crate::Error::MalformedDocument).

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

use crate::error::{Error, Result};

/// Parse an HTML string into a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Lookups ===

/// First descendant matching `selector`, if any.
#[inline]
#[must_use]
pub fn find<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

/// First descendant matching `selector`, or a malformed document error.
pub fn required<'a>(sel: &Selection<'a>, selector: &str) -> Result<Selection<'a>> {
    find(sel, selector).ok_or_else(|| Error::missing(selector))
}

/// All descendants matching `selector`, in document order.
#[must_use]
pub fn find_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value that the markup contract requires.
///
/// `context` names the element for the error message.
pub fn required_attribute(sel: &Selection, context: &str, name: &str) -> Result<String> {
    get_attribute(sel, name).ok_or_else(|| Error::missing(format!("{context}[{name}]")))
}

// === Content ===

/// Inner markup of the element, serialized without re-escaping its children.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Concatenated text of the element and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}
