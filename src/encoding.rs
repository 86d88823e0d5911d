//! Character encoding detection and transcoding.
//!
//! Saved channel pages are normally UTF-8, but pages passed through proxies or
//! archivers sometimes carry a different `<meta charset>`.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">` or the `charset=` part of a Content-Type meta.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect character encoding from HTML bytes, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A byte order mark overrides the declared charset; malformed sequences are
/// replaced with U+FFFD.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    text.into_owned()
}
