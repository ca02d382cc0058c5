//! Feed configuration.
//!
//! Values come from `P2PSTORE_*` keys. The CLI resolves them from the
//! process environment; the web UI resolves them at compile time.

use crate::endpoint::{DEFAULT_BASE_URL, DEFAULT_CHAT, Endpoint};
use crate::error::FeedError;

pub const KEY_API_URL: &str = "P2PSTORE_API_URL";
pub const KEY_CHAT: &str = "P2PSTORE_CHAT";
pub const KEY_INITIAL_MSG_ID: &str = "P2PSTORE_INITIAL_MSG_ID";
pub const KEY_VIEWER_USERNAME: &str = "P2PSTORE_VIEWER_USERNAME";
pub const KEY_VIEWER_NAME: &str = "P2PSTORE_VIEWER_NAME";
pub const KEY_VIEWER_IMAGE: &str = "P2PSTORE_VIEWER_IMAGE";

/// The signed-in user shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub username: String,
    pub full_name: String,
    pub image: String,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            username: "azizoid".to_string(),
            full_name: "Aziz Shahhuseynov".to_string(),
            image: "https://picsum.photos/56".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedConfig {
    pub endpoint: Endpoint,
    pub viewer: Viewer,
    /// Message selected before the user picks one.
    pub initial_msg_id: i64,
}

impl FeedConfig {
    /// Resolve configuration through `lookup`; missing keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(KEY_API_URL);
        let chat = lookup(KEY_CHAT);
        let endpoint = Endpoint::new(
            base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            chat.as_deref().unwrap_or(DEFAULT_CHAT),
        )?;

        let initial_msg_id = match lookup(KEY_INITIAL_MSG_ID) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                FeedError::Config(format!("{KEY_INITIAL_MSG_ID} is not an integer: {raw:?}"))
            })?,
            None => 0,
        };

        let defaults = Viewer::default();
        let viewer = Viewer {
            username: lookup(KEY_VIEWER_USERNAME).unwrap_or(defaults.username),
            full_name: lookup(KEY_VIEWER_NAME).unwrap_or(defaults.full_name),
            image: lookup(KEY_VIEWER_IMAGE).unwrap_or(defaults.image),
        };

        Ok(Self {
            endpoint,
            viewer,
            initial_msg_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FeedConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, FeedConfig::default());
        assert_eq!(config.viewer.username, "azizoid");
        assert_eq!(config.initial_msg_id, 0);
    }

    #[test]
    fn test_overrides() {
        let config = FeedConfig::from_lookup(lookup_in(&[
            (KEY_API_URL, "https://feed.example.net/"),
            (KEY_CHAT, "@otc"),
            (KEY_INITIAL_MSG_ID, " 12 "),
            (KEY_VIEWER_NAME, "Jane Roe"),
        ]))
        .unwrap();
        assert_eq!(
            config.endpoint.message_url(12),
            "https://feed.example.net/telegram/@otc?msg_id=12"
        );
        assert_eq!(config.initial_msg_id, 12);
        assert_eq!(config.viewer.full_name, "Jane Roe");
        assert_eq!(config.viewer.username, "azizoid");
    }

    #[test]
    fn test_bad_initial_id() {
        let err = FeedConfig::from_lookup(lookup_in(&[(KEY_INITIAL_MSG_ID, "abc")])).unwrap_err();
        assert!(matches!(err, FeedError::Config(_)));
    }

    #[test]
    fn test_empty_chat_rejected() {
        assert!(FeedConfig::from_lookup(lookup_in(&[(KEY_CHAT, " ")])).is_err());
    }
}
