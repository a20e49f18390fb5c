//! Read-only view of a content item.

/// What the publisher needs to know about an article-like content item.
///
/// Implemented by the host's content model. Every accessor is total: a
/// missing body or image is `None`, never an error.
pub trait ContentView: Send + Sync {
    /// The title, used verbatim as the first line of the post.
    fn title(&self) -> &str;

    /// The body as stored, usually HTML.
    fn body_html(&self) -> Option<&str>;

    /// Absolute canonical URL of the item.
    fn canonical_url(&self) -> &str;

    /// Absolute URL of the item's image, if one resolves.
    fn image_url(&self) -> Option<String>;
}

impl<T: ContentView + ?Sized> ContentView for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn body_html(&self) -> Option<&str> {
        (**self).body_html()
    }

    fn canonical_url(&self) -> &str {
        (**self).canonical_url()
    }

    fn image_url(&self) -> Option<String> {
        (**self).image_url()
    }
}
