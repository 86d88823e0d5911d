//! Channel page extraction.
//!
//! # Module Structure
//!
//! - `image`: `<img>` tags from inline background styles
//! - `reply`: quote blocks for replied-to messages
//! - `preview`: quote blocks for link preview cards
//! - `message`: one `FeedEntry` per message node
//! - `document`: the `FeedAggregate` for a whole listing page
//!
//! # Usage
//!
//! ```rust
//! use tfeed::{dom, extractor, Options};
//!
//! let html = r#"<html><head>
//!     <meta property="og:title" content="Channel">
//!     <meta property="og:description" content="News">
//! </head><body></body></html>"#;
//!
//! let doc = dom::parse(html);
//! let feed = extractor::extract_document(&doc, "https://t.me/s/channel", &Options::default())?;
//! assert_eq!(feed.link, "https://t.me/channel");
//! # Ok::<(), tfeed::Error>(())
//! ```

pub mod document;
pub mod image;
pub mod message;
pub mod preview;
pub mod reply;

pub use document::{extract_document, extract_document_at, BUILD_DATE_FORMAT};
pub use image::extract_image;
pub use message::{entry_title, extract_message};
pub use preview::extract_preview;
pub use reply::extract_reply;
