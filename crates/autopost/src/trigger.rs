//! Decides whether a content item should be published at all.

use crate::ContentItem;
use autopost_settings::AutopostSettings;

/// Content type and domain allow-lists applied before the engine runs.
///
/// An empty list allows everything. Once domains are listed, items that do
/// not name a domain are rejected.
///
/// # Examples
///
/// ```
/// use autopost::{ContentItem, TriggerFilter};
///
/// let filter = TriggerFilter::new(vec!["article".into()], vec!["news.example.com".into()]);
/// let item = ContentItem::new("Title", "https://news.example.com/node/1")
///     .with_domain("news.example.com");
///
/// assert!(filter.should_publish(&item));
/// assert!(!filter.should_publish(&item.clone().with_content_type("page")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters, derive_new::new)]
pub struct TriggerFilter {
    /// Allowed content types (empty = all)
    content_types: Vec<String>,
    /// Allowed site domains (empty = all)
    enabled_domains: Vec<String>,
}

impl TriggerFilter {
    /// Builds the filter from the `content_types` and `enabled_domains` settings.
    pub fn from_settings(settings: &AutopostSettings) -> Self {
        Self::new(
            settings.content_types().clone(),
            settings.enabled_domains().clone(),
        )
    }

    /// Whether `item` passes both allow-lists.
    pub fn should_publish(&self, item: &ContentItem) -> bool {
        self.rejection(item).is_none()
    }

    /// Why `item` is filtered out, or `None` when it passes.
    pub fn rejection(&self, item: &ContentItem) -> Option<String> {
        if !self.content_types.is_empty()
            && !self
                .content_types
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(item.content_type()))
        {
            return Some(format!(
                "content type '{}' is not enabled for autoposting",
                item.content_type()
            ));
        }

        if self.enabled_domains.is_empty() {
            return None;
        }

        match item.domain().as_deref().filter(|d| !d.is_empty()) {
            None => Some("item has no domain and domain filtering is enabled".to_string()),
            Some(domain) if self.allows_domain(domain) => None,
            Some(domain) => Some(format!("domain '{}' is not enabled for autoposting", domain)),
        }
    }

    fn allows_domain(&self, domain: &str) -> bool {
        self.enabled_domains
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(domain))
    }
}
