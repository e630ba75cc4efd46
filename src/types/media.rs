use serde::{Deserialize, Serialize};

/// A single image in an image-set result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaImage {
    #[serde(default)]
    pub url: String,
    /// Live-photo companion video, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_photo_url: Option<String>,
}

/// Author of the resolved media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaAuthor {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A resolved share link and its downloadable/previewable assets.
///
/// `video_url` is the identity field used for history deduplication; it is
/// empty for image-set results. `timestamp` (epoch milliseconds) is stamped
/// by the history store at insertion time, not supplied by the caller.
/// Fields the parse service adds in the future land in `extra` and round-trip
/// through persistence untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedMedia {
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover_url: String,
    /// Proxy endpoint used for preview and download, bypassing hotlink checks.
    #[serde(default)]
    pub proxy_url: String,
    #[serde(default)]
    pub images: Vec<MediaImage>,
    #[serde(default)]
    pub author: MediaAuthor,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ParsedMedia {
    /// True when the result is an image set rather than a single video.
    pub fn is_image_set(&self) -> bool {
        !self.images.is_empty()
    }
}
