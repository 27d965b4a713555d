//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stitch",
    bin_name = "stitch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Stitch features into an existing web application",
    long_about = "Stitch generates source files from a template tree and wires \
                  them into an existing application by patching its setup file.",
    after_help = "EXAMPLES:\n\
        \x20 stitch auth\n\
        \x20 stitch auth nickname age:int bio:nulls.Text\n\
        \x20 stitch auth --root ../shop --dry-run\n\
        \x20 stitch completions bash > /usr/share/bash-completion/completions/stitch",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add login, registration and password recovery.
    #[command(
        about = "Generate user authentication",
        after_help = "EXAMPLES:\n\
            \x20 stitch auth\n\
            \x20 stitch auth nickname:string age:int\n\
            \x20 stitch auth --templates ./my-auth-templates"
    )]
    Auth(AuthArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stitch completions bash > ~/.local/share/bash-completion/completions/stitch\n\
            \x20 stitch completions zsh  > ~/.zfunc/_stitch\n\
            \x20 stitch completions fish > ~/.config/fish/completions/stitch.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stitch configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stitch config list\n\
            \x20 stitch config path"
    )]
    Config(ConfigCommands),
}

// ── auth ──────────────────────────────────────────────────────────────────────

/// Arguments for `stitch auth`.
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Extra user fields as `name[:type]`; the type defaults to `string`.
    #[arg(value_name = "ATTR", help = "Extra user fields, e.g. nickname age:int")]
    pub attributes: Vec<String>,

    /// Root of the application to generate into.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Application root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Directory the users migration is placed in, relative to the root.
    #[arg(
        long = "migrations-dir",
        value_name = "DIR",
        help = "Migrations directory (default: migrations)"
    )]
    pub migrations_dir: Option<String>,

    /// Read templates from a directory instead of the built-in ones.
    #[arg(
        long = "templates",
        value_name = "DIR",
        env = "STITCH_TEMPLATES_DIR",
        help = "Template directory overriding the built-in templates"
    )]
    pub templates: Option<PathBuf>,

    /// Preview what would be written without touching the project.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stitch completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stitch config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
