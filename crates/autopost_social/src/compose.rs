//! Post message composition.

use autopost_core::FormatOptions;
use autopost_interface::ContentView;
use regex::Regex;
use std::sync::LazyLock;

/// Separates the title, excerpt and link.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Appended to excerpts that were cut short.
const ELLIPSIS: &str = "...";

/// Comments, and anything that opens like a tag. A `>` inside a quoted
/// attribute value does not close the tag. Unterminated tags and quotes run
/// to the end of the text; a `<` followed by anything else is literal text.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<!--.*?(?:-->|$)|<[A-Za-z/!?](?:"[^"]*(?:"|$)|'[^']*(?:'|$)|[^'">])*(?:>|$)"#,
    )
    .expect("Valid tag pattern")
});

/// Builds the text of a post: title, optional body excerpt, canonical URL.
///
/// Never fails; a missing body is simply left out.
///
/// # Examples
///
/// ```
/// use autopost_core::FormatOptions;
/// use autopost_social::compose_message;
/// # use autopost_interface::ContentView;
/// # struct Article;
/// # impl ContentView for Article {
/// #     fn title(&self) -> &str { "Council approves budget" }
/// #     fn body_html(&self) -> Option<&str> { Some("<p>The vote was 7-2.</p>") }
/// #     fn canonical_url(&self) -> &str { "https://news.example.com/budget" }
/// #     fn image_url(&self) -> Option<String> { None }
/// # }
///
/// let message = compose_message(&Article, &FormatOptions::default());
/// assert_eq!(
///     message,
///     "Council approves budget\n\nThe vote was 7-2.\n\nhttps://news.example.com/budget"
/// );
/// ```
pub fn compose_message<V>(content: &V, options: &FormatOptions) -> String
where
    V: ContentView + ?Sized,
{
    let mut message = content.title().to_string();

    if *options.include_body() {
        if let Some(body) = content.body_html().filter(|body| !body.is_empty()) {
            message.push_str(PARAGRAPH_BREAK);
            message.push_str(&excerpt(&strip_tags(body), *options.body_length()));
        }
    }

    message.push_str(PARAGRAPH_BREAK);
    message.push_str(content.canonical_url());
    message
}

/// The image to attach, when images are enabled and the content has one.
pub fn post_image<V>(content: &V, options: &FormatOptions) -> Option<String>
where
    V: ContentView + ?Sized,
{
    if !*options.include_image() {
        return None;
    }
    content.image_url().filter(|url| !url.is_empty())
}

/// Removes markup tags and comments, leaving text and entities untouched.
///
/// # Examples
///
/// ```
/// use autopost_social::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_tags("a < b &amp; c"), "a < b &amp; c");
/// ```
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Truncates `text` to `limit` characters, marking the cut with `...`.
///
/// Counts Unicode scalar values, not bytes. A non-positive limit yields an
/// empty excerpt.
///
/// # Examples
///
/// ```
/// use autopost_social::excerpt;
///
/// assert_eq!(excerpt("short", 10), "short");
/// assert_eq!(excerpt("exactly", 7), "exactly");
/// assert_eq!(excerpt("truncated text", 9), "truncated...");
/// assert_eq!(excerpt("anything", 0), "");
/// ```
pub fn excerpt(text: &str, limit: i64) -> String {
    let limit = match usize::try_from(limit) {
        Ok(limit) if limit > 0 => limit,
        _ => return String::new(),
    };

    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_handles_comments_and_unterminated_tags() {
        assert_eq!(strip_tags("before<!-- hidden -->after"), "beforeafter");
        assert_eq!(strip_tags("text <img src=\"x\""), "text ");
        assert_eq!(strip_tags("line<br/>break"), "linebreak");
        assert_eq!(strip_tags("<a\nhref=\"x\">link</a>"), "link");
    }

    #[test]
    fn test_strip_tags_skips_gt_inside_quoted_attributes() {
        assert_eq!(strip_tags(r#"<a title="x>y">link</a> text"#), "link text");
        assert_eq!(strip_tags("<img alt='1 > 0' src=\"a.jpg\">caption"), "caption");
        assert_eq!(strip_tags(r#"<a title="never closed>text"#), "");
        assert_eq!(strip_tags("<p>It's 5 > 3</p>"), "It's 5 > 3");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
        assert_eq!(excerpt("日本語のテキスト", 3), "日本語...");
        assert_eq!(excerpt("日本語", 3), "日本語");
    }

    #[test]
    fn test_excerpt_negative_limit_is_empty() {
        assert_eq!(excerpt("some text", -5), "");
        assert_eq!(excerpt("", 10), "");
    }
}
