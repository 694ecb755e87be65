//! Prompt construction and model output parsing

pub mod content_parser;
pub mod prompts;

pub use content_parser::{parse_generated, FALLBACK_TITLE_PREFIX};
pub use prompts::{blog_comment_prompt, blog_post_prompt};
