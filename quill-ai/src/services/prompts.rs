//! Prompt templates

/// Ask for a short blog post as a `{title, content}` JSON object
pub fn blog_post_prompt(topic: &str) -> String {
    format!(
        r#"You are an expert blog writer.
Write a short but engaging blog post about the topic below.

Topic: {topic}

The post should include:
- A clear and catchy title
- A few paragraphs (around 200 words)
- The tone should be professional yet friendly.

Respond ONLY with valid JSON, no markdown, no explanations, Respond in this exact JSON format:
{{
  "title": "Generated title here",
  "content": "Full post content here"
}}
"#
    )
}

/// Ask for one short comment on an existing post
pub fn blog_comment_prompt(title: &str, content: &str) -> String {
    format!(
        r#"You are a helpful assistant who writes insightful blog comments.
Read the following post and generate one short, thoughtful comment
that could be posted under it. around 50 words.

Post Title: {title}
Post Content: {content}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_prompt_embeds_topic_and_schema() {
        let prompt = blog_post_prompt("Rust ownership");
        assert!(prompt.contains("Topic: Rust ownership"));
        assert!(prompt.contains(r#""title": "Generated title here""#));
        assert!(prompt.contains(r#""content": "Full post content here""#));
    }

    #[test]
    fn test_comment_prompt_embeds_post() {
        let prompt = blog_comment_prompt("Hello", "World body");
        assert!(prompt.contains("Post Title: Hello"));
        assert!(prompt.contains("Post Content: World body"));
    }
}
