//! Preview command handler.

use crate::{ContentItem, TriggerFilter};
use autopost_interface::ContentView;
use autopost_settings::{AutopostSettings, default_settings_path};
use autopost_social::{GraphEndpoint, compose_message, post_image};
use std::path::{Path, PathBuf};

/// Handles the preview command.
///
/// Prints the composed message and the endpoint each enabled destination
/// would receive. Nothing is sent.
#[tracing::instrument(skip_all, fields(content = %content.display()))]
pub fn handle_preview_command(content: &Path, config: Option<PathBuf>) -> anyhow::Result<bool> {
    let config_path = config.unwrap_or_else(default_settings_path);
    let settings = AutopostSettings::from_file(&config_path)?.normalized();
    let item = ContentItem::from_file(content)?;

    let publish_config = settings.to_publish_config();
    let options = publish_config.options();
    let message = compose_message(&item, options);
    let image = post_image(&item, options);

    println!("\n👀 {}", item.title());
    println!("{}", "─".repeat(80));

    if !*publish_config.enabled() {
        println!("\n  ⚠️  Autoposting is disabled; publish would send nothing");
    }
    if let Some(reason) = TriggerFilter::from_settings(&settings).rejection(&item) {
        println!("\n  ⚠️  Filtered out without --force: {}", reason);
    }

    println!("\nMessage ({} characters):\n", message.chars().count());
    for line in message.lines() {
        println!("  {}", line);
    }

    match &image {
        Some(url) => println!("\nImage: {}", url),
        None => println!("\nImage: none"),
    }

    println!("\nDestinations:");
    let mut any = false;
    for destination in publish_config.destinations().iter().filter(|d| d.enabled()) {
        any = true;
        let endpoint = GraphEndpoint::select(*destination.kind(), image.is_some());
        println!(
            "\n  {} '{}' ({})\n     POST {}",
            endpoint,
            destination.display_name(),
            destination.id(),
            endpoint.url(settings.graph_api_base(), destination.id())
        );
    }
    if !any {
        println!("\n  No enabled destinations");
    }

    Ok(true)
}
