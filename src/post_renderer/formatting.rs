use crate::common::constants::CONTENT_PREVIEW_CHARS;
use crate::common::time_utils::format_timestamp;
use crate::common::Attachment;

/// First `CONTENT_PREVIEW_CHARS` characters of `content` followed by `...`
pub fn format_content_preview(content: &str) -> String {
    let preview: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

pub fn format_published(published: i64) -> String {
    match format_timestamp(published) {
        Some(date) => format!("{} ({})", published, date),
        None => published.to_string(),
    }
}

pub fn format_likes(likes: i64, liked_by_me: bool) -> String {
    if liked_by_me {
        format!("{} ♥", likes)
    } else {
        likes.to_string()
    }
}

pub fn format_attachment(attachment: &Attachment) -> String {
    format!("{} - {}", attachment.kind, attachment.url)
}
