use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::UNKNOWN_AUTHOR;
use super::lenient;

/// A single post as returned by `GET /api/posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "lenient::integer")]
    pub id: i64,
    #[serde(
        default,
        deserialize_with = "lenient::optional_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_id: Option<i64>,
    #[serde(
        rename = "author",
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_avatar: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub published: i64,
    #[serde(deserialize_with = "lenient::boolean")]
    pub liked_by_me: bool,
    #[serde(default, deserialize_with = "lenient::integer_or_zero")]
    pub likes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl Post {
    pub fn author_display_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }

    /// True when the post references an author but carries no inline name.
    pub fn needs_enrichment(&self) -> bool {
        self.author_id.is_some() && self.author_name.is_none()
    }

    /// Copy of this post with the author name and avatar taken from `author`.
    /// Both fields are cleared when `author` is `None`.
    pub fn with_author(&self, author: Option<&Author>) -> Post {
        Post {
            author_name: author.map(|a| a.name.clone()),
            author_avatar: author.map(|a| a.avatar.clone()),
            ..self.clone()
        }
    }
}

/// Author record from `GET /api/authors/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(deserialize_with = "lenient::integer")]
    pub id: i64,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttachmentType {
    Image,
    Video,
    Audio,
}

impl fmt::Display for AttachmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttachmentType::Image => "IMAGE",
            AttachmentType::Video => "VIDEO",
            AttachmentType::Audio => "AUDIO",
        };
        f.write_str(name)
    }
}
