//! Single message extraction.
//!
//! Steps run in a fixed order because later ones read the description built
//! by earlier ones: text, first photo, title, reply, link preview.

use dom_query::Selection;

use super::image::extract_image;
use super::preview::extract_preview;
use super::reply::extract_reply;
use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{
    DATE_LINK, FORWARDED_AUTHOR, LINK_PREVIEW, MESSAGE_TEXT, OWNER_NAME, PHOTO_WRAP, REPLY, TIME,
};
use crate::result::FeedEntry;
use crate::Options;

/// Marker appended to every entry title.
pub const TITLE_ELLIPSIS: &str = "...";

/// Build a feed entry from one message node.
///
/// Video players are not inspected; they contribute nothing beyond the
/// markup already present in the message text.
pub fn extract_message(message: &Selection, options: &Options) -> Result<FeedEntry> {
    let mut description = dom::find(message, MESSAGE_TEXT)
        .map(|text| dom::inner_html(&text).to_string())
        .unwrap_or_default();

    // Grouped albums carry several photo wraps; only the first is used.
    if let Some(photo) = dom::find(message, PHOTO_WRAP) {
        description = format!("{description}\n{}", extract_image(&photo));
    }

    let title = entry_title(&description, options.title_length);

    if let Some(reply) = dom::find(message, REPLY) {
        description = format!("{}\n{description}", extract_reply(&reply)?);
    }

    if let Some(preview) = dom::find(message, LINK_PREVIEW) {
        description = format!("{description}\n{}", extract_preview(&preview)?);
    }

    let author = dom::find(message, FORWARDED_AUTHOR)
        .or_else(|| dom::find(message, OWNER_NAME))
        .map(|node| dom::text_content(&node).to_string())
        .ok_or_else(|| Error::missing(format!("{FORWARDED_AUTHOR} or {OWNER_NAME}")))?;

    let pub_date = dom::required_attribute(&dom::required(message, TIME)?, TIME, "datetime")?;
    let link = dom::required_attribute(&dom::required(message, DATE_LINK)?, DATE_LINK, "href")?;

    Ok(FeedEntry {
        title,
        description,
        pub_date,
        link,
        author,
    })
}

/// First `length` characters of `description` plus the ellipsis marker.
///
/// Counts characters, not bytes, and ignores markup boundaries.
#[must_use]
pub fn entry_title(description: &str, length: usize) -> String {
    let mut title: String = description.chars().take(length).collect();
    title.push_str(TITLE_ELLIPSIS);
    title
}
