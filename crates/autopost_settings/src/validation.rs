//! Settings validation with actionable messages.

use crate::AutopostSettings;
use std::collections::HashSet;

/// Smallest excerpt length accepted by the settings.
pub const MIN_BODY_LENGTH: i64 = 50;

/// Largest excerpt length accepted by the settings.
pub const MAX_BODY_LENGTH: i64 = 1000;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What is wrong
    pub message: String,
    /// How to fix it, when there is an obvious fix
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Result of validating settings.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Problems that prevent publishing
    pub errors: Vec<ValidationIssue>,
    /// Problems publishing tolerates but that are likely mistakes
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats errors as a human-readable string.
    pub fn format_errors(&self) -> String {
        format_issues("Error", &self.errors)
    }

    /// Formats warnings as a human-readable string.
    pub fn format_warnings(&self) -> String {
        format_issues("Warning", &self.warnings)
    }
}

fn format_issues(label: &str, issues: &[ValidationIssue]) -> String {
    let mut output = String::new();

    for (i, issue) in issues.iter().enumerate() {
        if i > 0 {
            output.push_str("\n\n");
        }
        output.push_str(&format!("{} {}: {}", label, i + 1, issue.message));

        if let Some(suggestion) = &issue.suggestion {
            output.push_str(&format!("\n\n  Suggestion: {}", suggestion));
        }
    }

    output
}

/// Clamps an excerpt length into the accepted range.
///
/// # Examples
///
/// ```
/// use autopost_settings::clamp_body_length;
///
/// assert_eq!(clamp_body_length(10), 50);
/// assert_eq!(clamp_body_length(300), 300);
/// assert_eq!(clamp_body_length(5000), 1000);
/// ```
pub fn clamp_body_length(length: i64) -> i64 {
    length.clamp(MIN_BODY_LENGTH, MAX_BODY_LENGTH)
}

/// Checks settings for mistakes.
///
/// The engine tolerates everything reported as a warning; errors are
/// settings it cannot use at all.
#[tracing::instrument(skip_all)]
pub fn validate_settings(settings: &AutopostSettings) -> ValidationResult {
    let mut result = ValidationResult::default();

    match url::Url::parse(settings.graph_api_base()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => result.errors.push(
            ValidationIssue::new(format!(
                "graph_api_base uses unsupported scheme '{}'",
                url.scheme()
            ))
            .with_suggestion(format!("Use {}", crate::DEFAULT_GRAPH_API_BASE)),
        ),
        Err(e) => result.errors.push(
            ValidationIssue::new(format!(
                "graph_api_base '{}' is not a valid URL: {}",
                settings.graph_api_base(),
                e
            ))
            .with_suggestion(format!("Use {}", crate::DEFAULT_GRAPH_API_BASE)),
        ),
    }

    if *settings.request_timeout_secs() == 0 {
        result.errors.push(
            ValidationIssue::new("request_timeout_secs must be greater than zero")
                .with_suggestion("Use 30"),
        );
    }

    let body_length = *settings.post_options().body_length();
    if !(MIN_BODY_LENGTH..=MAX_BODY_LENGTH).contains(&body_length) {
        result.warnings.push(
            ValidationIssue::new(format!(
                "post_options.body_length is {} but must be between {} and {}",
                body_length, MIN_BODY_LENGTH, MAX_BODY_LENGTH
            ))
            .with_suggestion(format!("Use {}", clamp_body_length(body_length))),
        );
    }

    let mut seen = HashSet::new();
    for (index, page) in settings.pages().iter().enumerate() {
        let label = format!(
            "Destination {} ({})",
            index + 1,
            page.page_name().as_deref().unwrap_or("unnamed")
        );

        if !page.is_complete() {
            result.warnings.push(
                ValidationIssue::new(format!(
                    "{} has no page_id or access_token and will be ignored",
                    label
                ))
                .with_suggestion("Fill in both fields or remove the destination"),
            );
            continue;
        }

        let kind = page.kind().as_deref();
        if let Some(kind) = kind.filter(|k| !matches!(*k, "page" | "group")) {
            result.warnings.push(
                ValidationIssue::new(format!(
                    "{} has unknown type '{}' and will be treated as a page",
                    label, kind
                ))
                .with_suggestion("Use type = \"page\" or type = \"group\""),
            );
        }

        let id = page.page_id().as_deref().unwrap_or_default();
        if !id.chars().all(|c| c.is_ascii_digit()) {
            result.warnings.push(
                ValidationIssue::new(format!("{} has non-numeric ID '{}'", label, id))
                    .with_suggestion("Facebook Page and Group IDs are numeric"),
            );
        }

        if !seen.insert((id.to_string(), page.destination_kind())) {
            result.warnings.push(ValidationIssue::new(format!(
                "{} duplicates ID '{}'; the content will be posted twice",
                label, id
            )));
        }
    }

    if *settings.enabled() && !settings.pages().iter().any(|p| p.is_complete() && *p.enabled()) {
        result.warnings.push(
            ValidationIssue::new("Autoposting is enabled but no destination is usable")
                .with_suggestion("Add a destination with page_id and access_token"),
        );
    }

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated settings"
    );
    result
}
