//! Lenient projection of the messages served by the endpoint.
//!
//! The endpoint forwards whatever the chat history produced, so nothing here
//! validates shape: a missing or mistyped field is simply absent, and an
//! unknown message (`{}`) is the empty message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FeedError;

/// Kind of media attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "photo" => Some(MediaKind::Photo),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }
}

/// Media attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Media {
    pub kind: MediaKind,
    pub file_name: Option<String>,
    pub thumb_name: Option<String>,
}

/// One emoji reaction and how many users left it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub count: u64,
}

/// Author of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sender {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub status: Option<String>,
    pub last_online_date: Option<String>,
    pub is_deleted: bool,
}

impl Sender {
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let sender = Sender {
            id: obj.get("id").and_then(Value::as_i64),
            first_name: str_field(value, "first_name"),
            last_name: str_field(value, "last_name"),
            username: str_field(value, "username"),
            status: str_field(value, "status").map(|s| strip_enum_prefix(&s)),
            last_online_date: str_field(value, "last_online_date"),
            is_deleted: obj
                .get("is_deleted")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        };
        Some(sender)
    }

    /// "First Last", falling back to the username, then "Unknown".
    pub fn display_name(&self) -> String {
        let full: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();
        if !full.is_empty() {
            return full.join(" ");
        }
        match self.username.as_deref() {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => "Unknown".to_string(),
        }
    }

    /// `@username`, if the sender has one.
    pub fn handle(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| format!("@{u}"))
    }
}

/// A message as rendered by the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedMessage {
    pub id: Option<i64>,
    pub text: Option<String>,
    pub date: Option<String>,
    pub edit_date: Option<String>,
    pub views: Option<u64>,
    pub media: Option<Media>,
    pub reactions: Vec<Reaction>,
    pub sender: Option<Sender>,
}

impl FeedMessage {
    /// Project an arbitrary JSON value. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        FeedMessage {
            id: obj.get("id").and_then(Value::as_i64),
            text: str_field(value, "text")
                .filter(|t| !t.is_empty())
                .or_else(|| str_field(value, "caption")),
            date: str_field(value, "date"),
            edit_date: str_field(value, "edit_date"),
            views: obj.get("views").and_then(Value::as_u64),
            media: media_of(value),
            reactions: reactions_of(value),
            sender: obj.get("from_user").and_then(Sender::from_value),
        }
    }

    /// True when nothing was projected, as for the `{}` answer given to unknown ids.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Posting date, marked when the message was edited.
    pub fn posted_label(&self) -> Option<String> {
        let date = self.date.as_deref()?;
        Some(match self.edit_date {
            Some(_) => format!("{date} (edited)"),
            None => date.to_string(),
        })
    }
}

/// Parse a response body. Only malformed JSON is an error.
pub fn decode_message(body: &str) -> Result<FeedMessage, FeedError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(FeedMessage::from_value(&value))
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

// Enum values serialize as "UserStatus.RECENTLY".
fn strip_enum_prefix(s: &str) -> String {
    s.rsplit('.').next().unwrap_or(s).to_string()
}

fn media_of(value: &Value) -> Option<Media> {
    let kind = value
        .get("media_type")
        .and_then(Value::as_str)
        .and_then(MediaKind::parse)
        .or_else(|| {
            [MediaKind::Photo, MediaKind::Video]
                .into_iter()
                .find(|k| value.get(k.key()).is_some_and(Value::is_object))
        })?;
    let detail = value.get(kind.key());
    let name = |key: &str| detail.and_then(|d| str_field(d, key));
    Some(Media {
        kind,
        file_name: name("file_name"),
        thumb_name: name("thumb_name"),
    })
}

// Accepts either a bare list or the `{"reactions": [...]}` wrapper.
fn reactions_of(value: &Value) -> Vec<Reaction> {
    let list: &[Value] = match value.get("reactions") {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Object(wrapper)) => match wrapper.get("reactions") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };
    list.iter()
        .filter_map(|r| serde_json::from_value::<Reaction>(r.clone()).ok())
        .filter(|r| !r.emoji.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "_": "Message",
            "id": 17,
            "from_user": {
                "id": 99,
                "first_name": "Satoshi",
                "last_name": "N",
                "username": "sn",
                "status": "UserStatus.RECENTLY",
                "last_online_date": "2023-01-04 10:00:00"
            },
            "date": "2023-01-05 12:00:00",
            "caption": "Selling 0.1 BTC",
            "views": 120,
            "media_type": "photo",
            "photo": { "file_id": "x", "file_name": "a.jpg", "thumb_name": "thumb-a.jpg" },
            "reactions": { "reactions": [ { "emoji": "👍", "count": 3 } ] }
        })
    }

    #[test]
    fn test_full_message() {
        let msg = FeedMessage::from_value(&sample());
        assert_eq!(msg.id, Some(17));
        assert_eq!(msg.text.as_deref(), Some("Selling 0.1 BTC"));
        assert_eq!(msg.views, Some(120));
        let media = msg.media.unwrap();
        assert_eq!(media.kind, MediaKind::Photo);
        assert_eq!(media.file_name.as_deref(), Some("a.jpg"));
        assert_eq!(media.thumb_name.as_deref(), Some("thumb-a.jpg"));
        assert_eq!(msg.reactions, vec![Reaction { emoji: "👍".into(), count: 3 }]);
        let sender = msg.sender.unwrap();
        assert_eq!(sender.display_name(), "Satoshi N");
        assert_eq!(sender.handle().as_deref(), Some("@sn"));
        assert_eq!(sender.status.as_deref(), Some("RECENTLY"));
    }

    #[test]
    fn test_empty_object_is_empty_message() {
        let msg = decode_message("{}").unwrap();
        assert!(msg.is_empty());
        assert_eq!(msg, FeedMessage::default());
    }

    #[test]
    fn test_non_object_is_empty_message() {
        assert!(FeedMessage::from_value(&json!([1, 2, 3])).is_empty());
        assert!(FeedMessage::from_value(&Value::Null).is_empty());
    }

    #[test]
    fn test_mistyped_fields_are_absent() {
        let msg = FeedMessage::from_value(&json!({
            "id": "seventeen",
            "text": 5,
            "date": "2023-01-05",
            "from_user": "nobody",
            "reactions": [ { "emoji": 1 }, { "emoji": "🔥", "count": 2 } ]
        }));
        assert_eq!(msg.id, None);
        assert_eq!(msg.text, None);
        assert_eq!(msg.date.as_deref(), Some("2023-01-05"));
        assert_eq!(msg.sender, None);
        assert_eq!(msg.reactions, vec![Reaction { emoji: "🔥".into(), count: 2 }]);
    }

    #[test]
    fn test_partial_message_is_not_empty() {
        let msg = FeedMessage::from_value(&json!({
            "date": "2023-01-01",
            "reactions": [ { "emoji": "👍", "count": 2 } ],
            "views": 5
        }));
        assert!(!msg.is_empty());
        assert_eq!(msg.views, Some(5));
        assert!(!FeedMessage::from_value(&json!({ "views": 1 })).is_empty());
    }

    #[test]
    fn test_text_preferred_over_caption() {
        let msg = FeedMessage::from_value(&json!({ "text": "hi", "caption": "cap" }));
        assert_eq!(msg.text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_media_kind_inferred_from_payload() {
        let msg = FeedMessage::from_value(&json!({ "id": 1, "video": { "file_name": "v.mp4" } }));
        let media = msg.media.unwrap();
        assert_eq!(media.kind, MediaKind::Video);
        assert_eq!(media.file_name.as_deref(), Some("v.mp4"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut sender = Sender {
            username: Some("trader".into()),
            ..Sender::default()
        };
        assert_eq!(sender.display_name(), "trader");
        sender.username = None;
        assert_eq!(sender.display_name(), "Unknown");
        assert_eq!(sender.handle(), None);
    }

    #[test]
    fn test_posted_label() {
        let mut msg = FeedMessage {
            date: Some("2023-01-05 12:00:00".into()),
            ..FeedMessage::default()
        };
        assert_eq!(msg.posted_label().as_deref(), Some("2023-01-05 12:00:00"));
        msg.edit_date = Some("2023-01-06 08:00:00".into());
        assert_eq!(
            msg.posted_label().as_deref(),
            Some("2023-01-05 12:00:00 (edited)")
        );
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(matches!(
            decode_message("not json"),
            Err(FeedError::Decode(_))
        ));
    }
}
