//! Publish command handler.

use super::OutputFormat;
use crate::{ContentItem, TriggerFilter};
use autopost_core::{PostStatus, PublishRun};
use autopost_interface::ContentView;
use autopost_settings::{AutopostSettings, FileConfigSource, default_settings_path};
use autopost_social::{GraphClient, PublishEngine};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Handles the publish command.
///
/// Returns `Ok(false)` when at least one destination failed.
///
/// # Arguments
///
/// * `content` - Path to the content item JSON file
/// * `config` - Settings file, or the default location
/// * `force` - Skip the content type and domain filter
/// * `format` - Output format (human or json)
#[tracing::instrument(skip_all, fields(content = %content.display()))]
pub async fn handle_publish_command(
    content: &Path,
    config: Option<PathBuf>,
    force: bool,
    format: OutputFormat,
) -> anyhow::Result<bool> {
    let config_path = config.unwrap_or_else(default_settings_path);
    let settings = AutopostSettings::from_file(&config_path)?;
    let item = ContentItem::from_file(content)?;

    if !force {
        if let Some(reason) = TriggerFilter::from_settings(&settings).rejection(&item) {
            tracing::info!(%reason, "Content filtered out; nothing published");
            output_filtered(&item, &reason, format)?;
            return Ok(true);
        }
    }

    let client = GraphClient::new(Duration::from_secs(*settings.request_timeout_secs()))?;
    let engine = PublishEngine::new(FileConfigSource::new(&config_path), client)
        .with_graph_api_base(settings.graph_api_base().clone());

    let run = engine.publish(&item).await;
    tracing::info!(
        attempted = run.len(),
        succeeded = run.succeeded().count(),
        "Publish finished"
    );

    output_run(&item, &run, format)?;
    Ok(run.all_succeeded())
}

fn output_filtered(
    item: &ContentItem,
    reason: &str,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => {
            println!("\n⏭️  {}", item.title());
            println!("{}", "─".repeat(80));
            println!("\n  Not published: {}", reason);
        }
        OutputFormat::Json => {
            let output = json!({
                "published": false,
                "title": item.title(),
                "url": item.canonical_url(),
                "filtered": reason,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn output_run(
    item: &ContentItem,
    run: &PublishRun,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => output_human(item, run),
        OutputFormat::Json => {
            let output = json!({
                "published": !run.is_empty(),
                "title": item.title(),
                "url": item.canonical_url(),
                "run": run,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn output_human(item: &ContentItem, run: &PublishRun) {
    let status_icon = if run.is_empty() {
        "⏭️ "
    } else if run.all_succeeded() {
        "✅"
    } else {
        "❌"
    };

    println!("\n{} {}", status_icon, item.title());
    println!("{}", "─".repeat(80));

    if let Some(reason) = run.skipped() {
        println!("\n  Nothing published: {}", reason);
        return;
    }

    for outcome in run.outcomes() {
        match outcome.status() {
            PostStatus::Posted { post_id } => println!(
                "\n  ✅ {} '{}' ({}): post {}",
                outcome.kind(),
                outcome.destination_name(),
                outcome.destination_id(),
                post_id
            ),
            PostStatus::Failed { error } => println!(
                "\n  ❌ {} '{}' ({}): {}",
                outcome.kind(),
                outcome.destination_name(),
                outcome.destination_id(),
                error
            ),
        }
    }

    println!(
        "\n  {} of {} destinations succeeded",
        run.succeeded().count(),
        run.len()
    );
}
