//! Facebook Page and Group publishing for Autopost.
//!
//! When a content item is created or updated, [`PublishEngine`] composes a
//! post from it and sends that post to every enabled destination through
//! the Graph API:
//! - [`compose_message`] - title, optional body excerpt, canonical link
//! - [`GraphEndpoint`] - page/group status and photo endpoints
//! - [`GraphClient`] - reqwest implementation of [`HttpPoster`](autopost_interface::HttpPoster)
//! - [`PublishEngine`] - sequential dispatch with per-destination outcomes

#![warn(missing_docs)]

mod client;
mod compose;
mod engine;
mod graph;

pub use client::{DEFAULT_TIMEOUT, GraphClient};
pub use compose::{compose_message, excerpt, post_image, strip_tags};
pub use engine::PublishEngine;
pub use graph::{
    GRAPH_API_BASE, GraphEndpoint, GraphRequest, graph_error_message, interpret_response,
    status_error_message,
};
