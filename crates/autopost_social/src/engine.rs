//! Multi-destination publish engine.

use crate::compose::{compose_message, post_image};
use crate::graph::{GRAPH_API_BASE, GraphRequest, interpret_response, status_error_message};
use autopost_core::{
    Destination, FormatOptions, PostStatus, PublishConfig, PublishOutcome, PublishRun, SkipReason,
};
use autopost_interface::{ConfigSource, ContentView, HttpPoster};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{error, info, warn};

/// Publishes content items to every enabled destination, one at a time.
///
/// Settings are re-read from the [`ConfigSource`] on every run. A failure
/// at one destination, including a panic in a collaborator, is recorded as
/// that destination's outcome and never stops the run.
#[derive(Debug, Clone)]
pub struct PublishEngine<C, P> {
    config: C,
    poster: P,
    graph_api_base: String,
}

impl<C, P> PublishEngine<C, P>
where
    C: ConfigSource,
    P: HttpPoster,
{
    /// Creates an engine posting to the public Graph API.
    pub fn new(config: C, poster: P) -> Self {
        Self {
            config,
            poster,
            graph_api_base: GRAPH_API_BASE.to_string(),
        }
    }

    /// Posts to a different Graph API root (for proxies and tests).
    pub fn with_graph_api_base(mut self, base: impl Into<String>) -> Self {
        self.graph_api_base = base.into();
        self
    }

    /// The Graph API root in use.
    pub fn graph_api_base(&self) -> &str {
        &self.graph_api_base
    }

    /// Publishes `content` to every enabled destination in configured order.
    ///
    /// Returns an empty run when autoposting is disabled, no destination is
    /// configured, or settings cannot be loaded.
    #[tracing::instrument(skip_all, fields(title = %content.title()))]
    pub async fn publish<V>(&self, content: &V) -> PublishRun
    where
        V: ContentView + ?Sized,
    {
        let config = match self.config.load() {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Failed to load autopost settings; nothing published");
                return PublishRun::skip(SkipReason::ConfigUnavailable(e.kind().message()));
            }
        };
        let detailed = *config.detailed_logging();

        if !*config.enabled() {
            info!("Facebook autoposting is disabled in configuration");
            return PublishRun::skip(SkipReason::Disabled);
        }

        if config.destinations().is_empty() {
            warn!(url = %content.canonical_url(), "No Facebook destinations configured; skipping");
            return PublishRun::skip(SkipReason::NoDestinations);
        }

        if detailed {
            info!(
                url = %content.canonical_url(),
                destinations = config.destinations().len(),
                "Starting Facebook posting"
            );
        }

        let mut run = PublishRun::new();
        for (index, destination) in config.destinations().iter().enumerate() {
            if !destination.enabled() {
                if detailed {
                    info!(
                        index = index + 1,
                        destination_name = %destination.display_name(),
                        "Destination is disabled; skipping"
                    );
                }
                continue;
            }

            let outcome = self.publish_guarded(content, destination, &config).await;
            log_outcome(&outcome);
            run.push(outcome);
        }

        run
    }

    /// Publishes to one destination, converting a panic into a failure.
    async fn publish_guarded<V>(
        &self,
        content: &V,
        destination: &Destination,
        config: &PublishConfig,
    ) -> PublishOutcome
    where
        V: ContentView + ?Sized,
    {
        let attempt = self.publish_to(
            content,
            destination,
            config.options(),
            *config.detailed_logging(),
        );
        let status = match AssertUnwindSafe(attempt).catch_unwind().await {
            Ok(status) => status,
            Err(panic) => PostStatus::Failed {
                error: format!("Unexpected failure: {}", panic_message(panic.as_ref())),
            },
        };

        PublishOutcome::for_destination(destination, status)
    }

    #[tracing::instrument(
        skip_all,
        fields(destination_id = %destination.id(), kind = %destination.kind())
    )]
    async fn publish_to<V>(
        &self,
        content: &V,
        destination: &Destination,
        options: &FormatOptions,
        detailed: bool,
    ) -> PostStatus
    where
        V: ContentView + ?Sized,
    {
        if destination.id().is_empty() {
            return PostStatus::Failed {
                error: "Destination has no Facebook ID configured".to_string(),
            };
        }

        let message = compose_message(content, options);
        if detailed {
            info!(length = message.chars().count(), "Built message");
        }

        let image_url = post_image(content, options);
        if detailed {
            match &image_url {
                Some(url) => info!(image = %url, "Found image"),
                None => info!(include_image = *options.include_image(), "No image to include"),
            }
        }

        let request = GraphRequest::new(
            &self.graph_api_base,
            *destination.kind(),
            destination.id(),
            destination.access_token(),
            message,
            image_url,
        );
        if detailed {
            info!(endpoint = %request.endpoint(), url = %request.url(), "Making Graph API request");
        }

        match self.poster.post(request.url(), &request.form()).await {
            Ok(response) => {
                if detailed {
                    info!(status = response.status(), body = %response.body(), "Graph API response");
                }
                if response.is_success() {
                    let status = interpret_response(response.body());
                    if let PostStatus::Failed { .. } = status {
                        error!(response = %response.body(), "No post ID in Graph API response");
                    }
                    status
                } else {
                    PostStatus::Failed {
                        error: status_error_message(*response.status(), response.body()),
                    }
                }
            }
            Err(e) => PostStatus::Failed { error: e.message() },
        }
    }
}

fn log_outcome(outcome: &PublishOutcome) {
    match outcome.status() {
        PostStatus::Posted { post_id } => info!(
            destination_id = %outcome.destination_id(),
            destination_name = %outcome.destination_name(),
            kind = %outcome.kind(),
            post_id = %post_id,
            "Posted to Facebook"
        ),
        PostStatus::Failed { error } => error!(
            destination_id = %outcome.destination_id(),
            destination_name = %outcome.destination_name(),
            kind = %outcome.kind(),
            error = %error,
            "Failed to post to Facebook"
        ),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
