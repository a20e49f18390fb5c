//! Content items read from JSON.

use autopost_error::ContentError;
use autopost_interface::ContentView;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Content type assumed when an item does not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "article";

/// A published piece of site content.
///
/// ```json
/// {
///   "id": "42",
///   "title": "Council approves budget",
///   "body": "<p>The vote was 7-2.</p>",
///   "url": "https://news.example.com/node/42",
///   "image": "2024/10/council.jpg",
///   "domain": "news.example.com",
///   "base_url": "https://news.example.com/sites/default/files/"
/// }
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ContentItem {
    /// Identifier in the host system
    #[serde(default)]
    id: Option<String>,
    #[getter(skip)]
    #[setters(skip)]
    title: String,
    /// Body as HTML
    #[getter(skip)]
    #[serde(default)]
    body: Option<String>,
    #[getter(skip)]
    #[setters(skip)]
    url: String,
    /// Image reference, absolute or relative to `base_url`
    #[serde(default)]
    image: Option<String>,
    /// Host content type, e.g. `article`
    #[serde(default = "default_content_type")]
    content_type: String,
    /// Site domain the item was published on
    #[serde(default)]
    domain: Option<String>,
    /// Public URL that relative image paths resolve against
    #[serde(default)]
    base_url: Option<String>,
}

impl ContentItem {
    /// Creates an article with a title and canonical URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: None,
            url: url.into(),
            image: None,
            content_type: default_content_type(),
            domain: None,
            base_url: None,
        }
    }

    /// Reads an item from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid item.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ContentError::new(format!(
                "Failed to read content file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&contents)
    }

    /// Parses an item from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed, lacks `title` or `url`, or
    /// has an empty `url`.
    pub fn from_json_str(contents: &str) -> Result<Self, ContentError> {
        let item: Self = serde_json::from_str(contents)
            .map_err(|e| ContentError::new(format!("Invalid content item: {}", e)))?;

        if item.url.trim().is_empty() {
            return Err(ContentError::new("Content item has an empty url"));
        }

        Ok(item)
    }

    /// Absolute image URL, if the item has a usable image.
    ///
    /// # Examples
    ///
    /// ```
    /// use autopost::ContentItem;
    ///
    /// let item = ContentItem::new("Title", "https://news.example.com/node/1")
    ///     .with_image("2024/photo.jpg")
    ///     .with_base_url("https://news.example.com/files");
    /// assert_eq!(
    ///     item.resolved_image().as_deref(),
    ///     Some("https://news.example.com/files/2024/photo.jpg")
    /// );
    /// ```
    pub fn resolved_image(&self) -> Option<String> {
        resolve_image(self.image.as_deref()?, self.base_url.as_deref())
    }
}

impl ContentView for ContentItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn body_html(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn canonical_url(&self) -> &str {
        &self.url
    }

    fn image_url(&self) -> Option<String> {
        self.resolved_image()
    }
}

/// Turns an image reference into an absolute http(s) URL.
///
/// Absolute http(s) URLs pass through unchanged. Anything else is joined
/// onto `base`; without a base, or when the result is not http(s), there is
/// no image.
pub fn resolve_image(image: &str, base: Option<&str>) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }

    match Url::parse(image) {
        Ok(url) if is_web(&url) => return Some(image.to_string()),
        Ok(_) => return None,
        Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => {
            tracing::debug!(image, error = %e, "Unusable image reference");
            return None;
        }
    }

    let base = base?.trim();
    let base = if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{}/", base))
    }
    .ok()
    .filter(is_web)?;

    base.join(image)
        .ok()
        .filter(is_web)
        .map(|url| url.to_string())
}

fn is_web(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}
