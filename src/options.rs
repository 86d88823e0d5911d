//! Configuration options for feed extraction.
//!
//! The `Options` struct carries the caller-supplied values that are not
//! derived from the document itself.

/// Default listing page base URL.
pub const DEFAULT_BASE_URL: &str = "https://t.me/s/";

/// Default number of characters of the description kept in an entry title.
pub const DEFAULT_TITLE_LENGTH: usize = 80;

/// Configuration options for feed extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use tfeed::Options;
///
/// let options = Options {
///     ttl: 15,
///     ..Options::default()
/// };
/// assert_eq!(options.title_length, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Time-to-live advertised in the feed, in minutes.
    ///
    /// Default: `1`
    pub ttl: u32,

    /// Base URL of channel listing pages. A channel name is appended to it.
    ///
    /// Default: `"https://t.me/s/"`
    pub base_url: String,

    /// Number of characters of the pre-enrichment description used as title.
    ///
    /// Default: `80`
    pub title_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ttl: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            title_length: DEFAULT_TITLE_LENGTH,
        }
    }
}
