//! Share-link extraction.
//!
//! Share messages wrap the actual link in promotional text ("Check this out!
//! https://v.example.com/abc/ copy and open"); this pulls the first http(s)
//! URL out of the blob so the rest of the text never reaches the parse
//! service.

use std::sync::OnceLock;

use regex::Regex;

static SHARE_LINK_RE: OnceLock<Regex> = OnceLock::new();

fn share_link_re() -> &'static Regex {
    SHARE_LINK_RE.get_or_init(|| {
        Regex::new(r"https?://[\w.-]+[\w/-]*[\w.-]*\??[\w=&:+%-]*/*")
            .expect("share-link pattern is valid")
    })
}

/// Returns the first http(s) URL found in `text`, or `None` when the text
/// contains no link.
pub fn extract_share_link(text: &str) -> Option<String> {
    share_link_re()
        .find(text)
        .map(|m| m.as_str().to_string())
}
