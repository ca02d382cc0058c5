//! Plain-text rendering of a feed card.

use crate::message::{FeedMessage, MediaKind};

/// Render a message the way the feed card lays it out.
pub fn render_text(msg: &FeedMessage) -> String {
    if msg.is_empty() {
        return "(no message)\n".to_string();
    }

    let mut out = match &msg.sender {
        Some(sender) => match sender.handle() {
            Some(handle) => format!("{} ({handle})", sender.display_name()),
            None => sender.display_name(),
        },
        None => "Unknown".to_string(),
    };
    if let Some(id) = msg.id {
        out.push_str(&format!("  #{id}"));
    }
    out.push('\n');

    if let Some(posted) = msg.posted_label() {
        out.push_str(&format!("{posted}\n"));
    }
    if let Some(text) = &msg.text {
        out.push_str(&format!("\n{}\n", text.trim_end()));
    }
    if let Some(media) = &msg.media {
        let kind = match media.kind {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        };
        let name = media.file_name.as_deref().unwrap_or("not downloaded");
        out.push_str(&format!("\n[{kind}: {name}]\n"));
    }
    if !msg.reactions.is_empty() {
        let line: Vec<String> = msg
            .reactions
            .iter()
            .map(|r| format!("{} {}", r.emoji, r.count))
            .collect();
        out.push_str(&format!("\n{}\n", line.join("  ")));
    }
    if let Some(views) = msg.views {
        out.push_str(&format!("{views} views\n"));
    }
    out
}
