//! Validation command handler.

use super::OutputFormat;
use autopost_core::DestinationKind;
use autopost_settings::{
    AutopostSettings, ValidationIssue, ValidationResult, default_settings_path, validate_settings,
};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Handles the validate command.
///
/// Returns `Ok(false)` when the settings have errors. Warnings alone pass.
///
/// # Arguments
///
/// * `config` - Settings file, or the default location
/// * `format` - Output format (human or json)
#[tracing::instrument(skip_all)]
pub fn handle_validate_command(
    config: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let path = config.unwrap_or_else(default_settings_path);
    tracing::info!(path = %path.display(), "Starting validation");

    let settings = AutopostSettings::from_file(&path)?;
    let result = validate_settings(&settings);

    match format {
        OutputFormat::Human => output_human(&path, &settings, &result),
        OutputFormat::Json => output_json(&path, &settings, &result)?,
    }

    Ok(result.is_valid())
}

/// Outputs validation result in human-readable format.
fn output_human(path: &Path, settings: &AutopostSettings, result: &ValidationResult) {
    let status_icon = if !result.is_valid() {
        "❌"
    } else if !result.warnings.is_empty() {
        "⚠️"
    } else {
        "✅"
    };

    println!("\n{} {}", status_icon, path.display());
    println!("{}", "─".repeat(80));

    let config = settings.clone().normalized().to_publish_config();
    let usable = config.destinations();
    let groups = usable
        .iter()
        .filter(|d| *d.kind() == DestinationKind::Group)
        .count();
    println!(
        "\n  Autoposting {}; {} usable destinations ({} pages, {} groups), {} enabled",
        if *settings.enabled() { "enabled" } else { "disabled" },
        usable.len(),
        usable.len() - groups,
        groups,
        usable.iter().filter(|d| d.enabled()).count()
    );

    print_issues("Errors", &result.errors);
    print_issues("Warnings", &result.warnings);

    if result.is_valid() && result.warnings.is_empty() {
        println!("\n  No issues found");
    }
}

fn print_issues(heading: &str, issues: &[ValidationIssue]) {
    if issues.is_empty() {
        return;
    }

    println!("\n{}:", heading);
    for (i, issue) in issues.iter().enumerate() {
        println!("\n  {}. {}", i + 1, issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("     💡 {}", suggestion);
        }
    }
}

/// Outputs validation result in JSON format.
fn output_json(
    path: &Path,
    settings: &AutopostSettings,
    result: &ValidationResult,
) -> Result<(), serde_json::Error> {
    let issues = |issues: &[ValidationIssue]| -> Vec<serde_json::Value> {
        issues
            .iter()
            .map(|issue| {
                json!({
                    "message": issue.message,
                    "suggestion": issue.suggestion,
                })
            })
            .collect()
    };

    let output = json!({
        "valid": result.is_valid(),
        "file": path.display().to_string(),
        "enabled": settings.enabled(),
        "errors": issues(&result.errors),
        "warnings": issues(&result.warnings),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
