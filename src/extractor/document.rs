//! Whole-page extraction: messages plus channel metadata.

use chrono::{DateTime, FixedOffset, Local};
use dom_query::Document;

use super::message::extract_message;
use crate::dom;
use crate::error::Result;
use crate::patterns::{FEED_DESCRIPTION, FEED_TITLE, MESSAGE_WRAP};
use crate::result::{FeedAggregate, FeedEntry};
use crate::url_utils::canonical_link;
use crate::Options;

/// RFC-822 style timestamp used for `lastBuildDate`.
pub const BUILD_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Extract every message of a parsed listing page, stamped with the local time.
///
/// `url` is the listing URL the page was fetched from.
pub fn extract_document(doc: &Document, url: &str, options: &Options) -> Result<FeedAggregate> {
    extract_document_at(doc, url, options, Local::now().fixed_offset())
}

/// Same as [`extract_document`] with an explicit build time.
pub fn extract_document_at(
    doc: &Document,
    url: &str,
    options: &Options,
    now: DateTime<FixedOffset>,
) -> Result<FeedAggregate> {
    let root = doc.select("html");

    let entries = dom::find_all(&root, MESSAGE_WRAP)
        .iter()
        .map(|message| extract_message(message, options))
        .collect::<Result<Vec<FeedEntry>>>()?;
    tracing::debug!(url, count = entries.len(), "extracted channel messages");

    let title = dom::required_attribute(&dom::required(&root, FEED_TITLE)?, FEED_TITLE, "content")?;
    let description = dom::required_attribute(
        &dom::required(&root, FEED_DESCRIPTION)?,
        FEED_DESCRIPTION,
        "content",
    )?;

    Ok(FeedAggregate {
        title,
        description,
        link: canonical_link(url),
        last_build_date: now.format(BUILD_DATE_FORMAT).to_string(),
        ttl: options.ttl,
        entries,
    })
}
