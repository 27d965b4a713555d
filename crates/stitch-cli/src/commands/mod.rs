//! Command handlers, one module per subcommand.

pub mod auth;
pub mod completions;
pub mod config;
