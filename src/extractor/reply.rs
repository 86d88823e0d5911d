//! Quoted replies.

use dom_query::Selection;

use crate::dom;
use crate::error::Result;
use crate::patterns::{REPLY, REPLY_AUTHOR, REPLY_TEXT};

/// Render a reply node as a quote block.
///
/// Author and text markup are copied verbatim. The caller only passes nodes it
/// already found, so a missing author, text or `href` is a malformed document.
pub fn extract_reply(reply: &Selection) -> Result<String> {
    let author = dom::inner_html(&dom::required(reply, REPLY_AUTHOR)?);
    let text = dom::inner_html(&dom::required(reply, REPLY_TEXT)?);
    let href = dom::required_attribute(reply, REPLY, "href")?;

    Ok(format!(
        r#"<div class="rsshub-quote">
        <blockquote>
            <p><a href="{href}"><b>{author}</b>:</a></p>
            <p>{text}</p>
        </blockquote>
    </div>"#
    ))
}
