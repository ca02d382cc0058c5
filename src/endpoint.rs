//! Location of the remote message source.
//!
//! The message API exposes one route per chat:
//!
//! - `GET {base}/telegram/{chat}` lists the known message ids, sorted.
//! - `GET {base}/telegram/{chat}?msg_id=N` returns message `N`, or `{}` if unknown.
//! - `...&thumb=true` / `...&photo=true` serve the message's media.

use crate::error::FeedError;

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Default chat the feed is read from.
pub const DEFAULT_CHAT: &str = "@bitcoinp2pmarketplace";

/// Which rendition of a message's media to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaVariant {
    Thumb,
    Photo,
}

impl MediaVariant {
    fn query_key(self) -> &'static str {
        match self {
            MediaVariant::Thumb => "thumb",
            MediaVariant::Photo => "photo",
        }
    }
}

/// Base URL plus chat identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    chat: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat: DEFAULT_CHAT.to_string(),
        }
    }
}

impl Endpoint {
    /// Create an endpoint. Trailing slashes on the base URL are dropped.
    pub fn new(base_url: &str, chat: &str) -> Result<Self, FeedError> {
        let base_url = base_url.trim().trim_end_matches('/');
        let chat = chat.trim();
        if base_url.is_empty() {
            return Err(FeedError::Config("base URL is empty".into()));
        }
        if chat.is_empty() {
            return Err(FeedError::Config("chat is empty".into()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            chat: chat.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chat(&self) -> &str {
        &self.chat
    }

    /// URL listing every message id in the chat.
    pub fn offers_url(&self) -> String {
        format!("{}/telegram/{}", self.base_url, self.chat)
    }

    /// URL of a single message.
    pub fn message_url(&self, msg_id: i64) -> String {
        format!("{}?msg_id={}", self.offers_url(), msg_id)
    }

    /// URL of a message's thumbnail or full photo.
    pub fn media_url(&self, msg_id: i64, variant: MediaVariant) -> String {
        format!("{}&{}=true", self.message_url(msg_id), variant.query_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_url() {
        let ep = Endpoint::default();
        assert_eq!(
            ep.message_url(0),
            "http://localhost:8001/telegram/@bitcoinp2pmarketplace?msg_id=0"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let ep = Endpoint::new("https://api.example.org//", "@shop").unwrap();
        assert_eq!(ep.base_url(), "https://api.example.org");
        assert_eq!(ep.offers_url(), "https://api.example.org/telegram/@shop");
    }

    #[test]
    fn test_media_urls() {
        let ep = Endpoint::new("http://h:1", "@c").unwrap();
        assert_eq!(
            ep.media_url(42, MediaVariant::Thumb),
            "http://h:1/telegram/@c?msg_id=42&thumb=true"
        );
        assert_eq!(
            ep.media_url(42, MediaVariant::Photo),
            "http://h:1/telegram/@c?msg_id=42&photo=true"
        );
    }

    #[test]
    fn test_empty_parts_rejected() {
        assert!(matches!(
            Endpoint::new("  / ", "@c"),
            Err(FeedError::Config(_))
        ));
        assert!(matches!(
            Endpoint::new("http://h", ""),
            Err(FeedError::Config(_))
        ));
    }
}
