//! Image references encoded in inline `background-image` styles.

use dom_query::Selection;

use crate::dom;
use crate::patterns::BACKGROUND_URL;

/// Build a normalized `<img>` tag from a node's `style="...url('...')"`.
///
/// Returns an empty string when the node has no style or the style carries
/// no quoted URL.
#[must_use]
pub fn extract_image(node: &Selection) -> String {
    let Some(style) = dom::get_attribute(node, "style") else {
        return String::new();
    };

    BACKGROUND_URL
        .captures(&style)
        .and_then(|caps| caps.get(1))
        .map(|href| img_tag(href.as_str()))
        .unwrap_or_default()
}

pub(crate) fn img_tag(src: &str) -> String {
    format!(r#"<img src="{src}" referrerpolicy="no-referrer">"#)
}
