//! Result types for extraction output.
//!
//! A `FeedAggregate` owns its entries; every extraction call builds a new one.

use serde::{Deserialize, Serialize};

/// One message of a channel, ready for syndication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// First characters of the message text (and image tag) followed by `...`.
    ///
    /// Computed before reply and link preview blocks are merged in, so it may
    /// end in the middle of an `<img>` tag.
    pub title: String,

    /// Normalized HTML fragment: reply quote, text, image, link preview.
    pub description: String,

    /// ISO-8601 timestamp copied verbatim from the `<time datetime>` attribute.
    pub pub_date: String,

    /// Permalink of the message.
    pub link: String,

    /// Forwarded-from author, or the channel owner name.
    pub author: String,
}

/// Channel-level feed: metadata plus entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedAggregate {
    /// Channel title (`og:title`).
    pub title: String,

    /// Channel description (`og:description`).
    pub description: String,

    /// Public channel URL, with the listing segment removed.
    pub link: String,

    /// Extraction time, `%a, %d %b %Y %H:%M:%S %z`.
    pub last_build_date: String,

    /// Time-to-live in minutes.
    pub ttl: u32,

    /// Entries in document order, duplicates included.
    pub entries: Vec<FeedEntry>,
}
