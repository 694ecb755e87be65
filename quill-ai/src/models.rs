//! Generated content and the post shape read from quill-posts

use serde::{Deserialize, Serialize};

/// Title and body drafted by the model
///
/// Both fields are always present: when the model output cannot be decoded
/// the parser synthesizes them instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub title: String,
    pub content: String,
}

/// The fields of a quill-posts record needed to prompt for a comment
#[derive(Debug, Clone, Deserialize)]
pub struct PostDto {
    pub title: String,
    pub content: String,
}
