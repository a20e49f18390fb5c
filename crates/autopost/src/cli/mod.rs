//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the autopost binary.

mod commands;
mod preview;
mod publish;
mod validate;

pub use commands::{Cli, Commands, OutputFormat};
pub use preview::handle_preview_command;
pub use publish::handle_publish_command;
pub use validate::handle_validate_command;
