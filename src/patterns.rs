//! CSS selectors and compiled regex patterns for the channel page vocabulary.
//!
//! The listing page markup uses a fixed set of class names; anything outside
//! this vocabulary is not recognized.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Document Level
// =============================================================================

/// Wrapper around every message on the listing page.
pub const MESSAGE_WRAP: &str = "div.tgme_widget_message_wrap";

/// Channel title metadata.
pub const FEED_TITLE: &str = r#"meta[property="og:title"]"#;

/// Channel description metadata.
pub const FEED_DESCRIPTION: &str = r#"meta[property="og:description"]"#;

// =============================================================================
// Message Level
// =============================================================================

/// Primary text content of a message.
pub const MESSAGE_TEXT: &str = "div.js-message_text";

/// Attached photo. Only the first one in a message is used.
pub const PHOTO_WRAP: &str = "a.tgme_widget_message_photo_wrap";

/// Quoted message the post replies to.
pub const REPLY: &str = "a.tgme_widget_message_reply";

/// Inline link preview card.
pub const LINK_PREVIEW: &str = "a.tgme_widget_message_link_preview";

/// Original author of a forwarded message.
pub const FORWARDED_AUTHOR: &str = "span.tgme_widget_message_from_author";

/// Channel owner name link.
pub const OWNER_NAME: &str = "a.tgme_widget_message_owner_name";

/// Publish time, carries the `datetime` attribute.
pub const TIME: &str = "time.time";

/// Permalink, carries the `href` attribute.
pub const DATE_LINK: &str = "a.tgme_widget_message_date";

// =============================================================================
// Reply Quote
// =============================================================================

pub const REPLY_AUTHOR: &str = "span.tgme_widget_message_author_name";

pub const REPLY_TEXT: &str = "div.tgme_widget_message_text";

// =============================================================================
// Link Preview
// =============================================================================

pub const PREVIEW_SITE_NAME: &str = "div.link_preview_site_name";

pub const PREVIEW_TITLE: &str = "div.link_preview_title";

pub const PREVIEW_DESCRIPTION: &str = "div.link_preview_description";

pub const PREVIEW_IMAGE: &str = "i.link_preview_image";

// =============================================================================
// Inline Styles
// =============================================================================

/// Matches the image URL in `background-image:url('...')`.
///
/// Greedy: the capture runs to the last `')` in the style value.
pub static BACKGROUND_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url\('(.*)'\)").expect("BACKGROUND_URL regex"));
