mod formatting;

use crate::common::Post;
use formatting::{format_attachment, format_content_preview, format_likes, format_published};

/// Human-readable report for all posts, in order.
pub fn render_report(posts: &[Post]) -> String {
    let mut lines = Vec::with_capacity(posts.len() * 4 + 1);
    lines.push(format!("Found {} posts:\n\n", posts.len()));

    for (i, post) in posts.iter().enumerate() {
        lines.push(render_post(i + 1, post));
        lines.push("\n".to_string());
    }

    lines.join("")
}

/// Block for a single post; `index` is 1-based.
pub fn render_post(index: usize, post: &Post) -> String {
    let mut block = format!(
        "{}. [ID: {}] {}: {}\n   Likes: {}, Published: {}\n",
        index,
        post.id,
        post.author_display_name(),
        format_content_preview(&post.content),
        format_likes(post.likes, post.liked_by_me),
        format_published(post.published),
    );

    if let Some(attachment) = &post.attachment {
        block.push_str(&format!("   Attachment: {}\n", format_attachment(attachment)));
    }

    block
}
