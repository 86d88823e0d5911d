//! URL Utility Functions
//!
//! Mapping between listing page URLs (`https://t.me/s/<channel>`) and public
//! channel URLs (`https://t.me/<channel>`).

use url::Url;

use crate::error::Result;

/// Path segment that marks a listing (web preview) page.
pub const LISTING_SEGMENT: &str = "s";

/// Join a channel name onto the listing base URL.
///
/// Follows relative reference resolution, so a base without a trailing slash
/// replaces its last segment.
///
/// # Example
///
/// ```rust
/// use tfeed::url_utils::channel_url;
///
/// assert_eq!(channel_url("https://t.me/s/", "durov")?, "https://t.me/s/durov");
/// # Ok::<(), tfeed::Error>(())
/// ```
pub fn channel_url(base: &str, channel: &str) -> Result<String> {
    let base = Url::parse(base)?;
    Ok(base.join(channel.trim())?.to_string())
}

/// Public channel URL for a listing URL: the leading `s` segment is dropped.
///
/// Query and fragment are kept. Inputs that do not parse as URLs get a plain
/// textual `t.me/s/` -> `t.me/` replacement.
#[must_use]
pub fn canonical_link(listing_url: &str) -> String {
    let Ok(mut url) = Url::parse(listing_url) else {
        return listing_url.replace("t.me/s/", "t.me/");
    };

    let rest: Option<Vec<String>> = url.path_segments().and_then(|mut segments| {
        (segments.next() == Some(LISTING_SEGMENT)).then(|| segments.map(str::to_string).collect())
    });

    match rest {
        Some(rest) => {
            url.set_path(&format!("/{}", rest.join("/")));
            url.to_string()
        }
        None => listing_url.to_string(),
    }
}
