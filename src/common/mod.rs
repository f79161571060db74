pub mod constants;
pub mod lenient;
pub mod time_utils;
pub mod types;

pub use types::{Attachment, AttachmentType, Author, Post};
