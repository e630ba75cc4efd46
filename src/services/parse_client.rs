//! Parse-service client.
//!
//! The resolver itself runs server-side; the client sends one GET per
//! submitted link and receives a `{code, msg, data}` envelope. The UI calls
//! [`ParseClient::parse_share_url`] once per input and records the result in
//! the history store on success.

use serde::Deserialize;

use crate::types::errors::ParseError;
use crate::types::media::ParsedMedia;

#[cfg(feature = "network")]
use crate::services::share_link::extract_share_link;

/// Trait for the parse collaborator the UI invokes once per submitted link.
pub trait ParseClient {
    fn parse_share_url(&self, url: &str) -> Result<ParsedMedia, ParseError>;
}

/// Response envelope returned by the parse service.
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<ParsedMedia>,
}

impl ParseResponse {
    /// Unpacks the envelope into a media record or an API error.
    pub fn into_media(self) -> Result<ParsedMedia, ParseError> {
        let ParseResponse { code, msg, data } = self;
        if code != 200 {
            return Err(ParseError::Api { code, msg });
        }
        data.ok_or(ParseError::Api {
            code,
            msg: "response missing data".to_string(),
        })
    }
}

/// HTTP client for the parse service.
#[cfg(feature = "network")]
pub struct HttpParseClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "network")]
impl HttpParseClient {
    /// Creates a client against the given service base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Proxy endpoint used for preview and download, bypassing hotlink checks.
    fn proxy_url_for(&self, video_url: &str) -> String {
        format!(
            "{}/video/proxy?url={}",
            self.base_url,
            urlencoding::encode(video_url)
        )
    }
}

#[cfg(feature = "network")]
impl ParseClient for HttpParseClient {
    /// Extracts the link from the share text, queries the parse service, and
    /// returns the resolved media with its proxy URL attached.
    fn parse_share_url(&self, url: &str) -> Result<ParsedMedia, ParseError> {
        let link =
            extract_share_link(url).ok_or_else(|| ParseError::InvalidLink(url.to_string()))?;

        let response = self
            .client
            .get(format!("{}/video/share/url/parse", self.base_url))
            .query(&[("url", link.as_str())])
            .send()
            .map_err(|e| ParseError::Network(e.to_string()))?;

        let envelope: ParseResponse = response
            .json()
            .map_err(|e| ParseError::Network(e.to_string()))?;

        let mut media = envelope.into_media()?;
        if !media.video_url.is_empty() {
            media.proxy_url = self.proxy_url_for(&media.video_url);
        }
        Ok(media)
    }
}
