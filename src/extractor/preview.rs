//! Inline link preview cards.

use dom_query::Selection;

use super::image::extract_image;
use crate::dom;
use crate::error::Result;
use crate::patterns::{
    LINK_PREVIEW, PREVIEW_DESCRIPTION, PREVIEW_IMAGE, PREVIEW_SITE_NAME, PREVIEW_TITLE,
};

/// Render a link preview node as a quote block.
///
/// Site name and `href` are required. The title falls back to the site name;
/// the description paragraph and the image are left empty when absent.
pub fn extract_preview(preview: &Selection) -> Result<String> {
    let site_name = dom::inner_html(&dom::required(preview, PREVIEW_SITE_NAME)?).to_string();
    let href = dom::required_attribute(preview, LINK_PREVIEW, "href")?;

    let image = dom::find(preview, PREVIEW_IMAGE)
        .map(|node| extract_image(&node))
        .unwrap_or_default();

    let title = dom::find(preview, PREVIEW_TITLE)
        .map_or_else(|| site_name.clone(), |node| dom::inner_html(&node).to_string());
    let title_line = format!(r#"<a href="{href}">{title}</a>"#);

    let description = dom::find(preview, PREVIEW_DESCRIPTION)
        .map(|node| format!("<p>{}</p>", dom::inner_html(&node)))
        .unwrap_or_default();

    Ok(format!(
        "<blockquote>
        <b>{site_name}</b><br>
        <b>{title_line}</b><br>
        {description}
        {image}
    </blockquote>"
    ))
}
