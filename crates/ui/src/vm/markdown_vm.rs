use std::collections::{HashMap, HashSet};

/// Render lesson markdown to sanitized HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Links are unwrapped to their text so the webview never navigates away.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "b", "i", "del", "code", "pre", "blockquote", "ul", "ol",
        "li", "h3", "h4", "table", "thead", "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let attributes: HashMap<&str, HashSet<&str>> = HashMap::new();

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_lists() {
        let html = markdown_to_html("Plants **eat** light.\n\n- roots\n- leaves");
        assert!(html.contains("<strong>eat</strong>"), "{html}");
        assert!(html.contains("<li>roots</li>"), "{html}");
    }

    #[test]
    fn strips_scripts_and_handlers() {
        let html = markdown_to_html("Hi <script>alert(1)</script><img src=x onerror=alert(1)>");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("onerror"), "{html}");
        assert!(html.contains("Hi"), "{html}");
    }

    #[test]
    fn links_keep_text_but_lose_targets() {
        let html = markdown_to_html("See [the source](https://example.com/cells) for more.");
        assert!(html.contains("the source"), "{html}");
        assert!(!html.contains("<a"), "{html}");
        assert!(!html.contains("href"), "{html}");
    }

    #[test]
    fn plain_story_becomes_paragraphs() {
        let html = markdown_to_html("Once upon a time.\n\nThe end.");
        assert_eq!(html.matches("<p>").count(), 2, "{html}");
    }
}
