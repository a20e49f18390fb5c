//! Core data types for the Autopost Facebook publishing library.
//!
//! This crate provides the destinations, formatting options and publish
//! results shared by every other Autopost crate.

#![warn(missing_docs)]

mod destination;
mod options;
mod outcome;
mod publish_config;
mod run;

pub use destination::{Destination, DestinationBuilder, DestinationKind};
pub use options::{DEFAULT_BODY_LENGTH, FormatOptions};
pub use outcome::{NO_POST_ID_ERROR, PostStatus, PublishOutcome};
pub use publish_config::{PublishConfig, PublishConfigBuilder};
pub use run::{PublishRun, SkipReason};
