//! RSS 2.0 rendering of a [`FeedAggregate`].
//!
//! Field values are written verbatim; the description HTML is escaped by the
//! XML writer, not rewritten.

use rss::{Channel, ChannelBuilder, Item, ItemBuilder};

use crate::error::{Error, Result};
use crate::result::{FeedAggregate, FeedEntry};

/// Convert the aggregate into an `rss::Channel`.
#[must_use]
pub fn to_channel(feed: &FeedAggregate) -> Channel {
    ChannelBuilder::default()
        .title(feed.title.clone())
        .link(feed.link.clone())
        .description(feed.description.clone())
        .last_build_date(Some(feed.last_build_date.clone()))
        .ttl(Some(feed.ttl.to_string()))
        .items(feed.entries.iter().map(to_item).collect::<Vec<Item>>())
        .build()
}

fn to_item(entry: &FeedEntry) -> Item {
    ItemBuilder::default()
        .title(Some(entry.title.clone()))
        .description(Some(entry.description.clone()))
        .pub_date(Some(entry.pub_date.clone()))
        .link(Some(entry.link.clone()))
        .author(Some(entry.author.clone()))
        .build()
}

/// Render the aggregate as an RSS 2.0 XML document.
pub fn to_rss(feed: &FeedAggregate) -> Result<String> {
    let buf = to_channel(feed)
        .write_to(Vec::new())
        .map_err(|e| Error::Render(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::Render(e.to_string()))
}
