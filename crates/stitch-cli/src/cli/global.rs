//! Flags accepted by every `stitch` subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

/// Logging, output and configuration flags, flattened into [`super::Cli`].
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of the generator run on stderr.
    ///
    /// `-v` logs each written file, `-vv` adds template and anchor details,
    /// `-vvv` traces every pipeline stage. `RUST_LOG` overrides all of these.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail (-v files, -vv anchors, -vvv stages)"
    )]
    pub verbose: u8,

    /// Print only errors; the JSON report is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors"
    )]
    pub quiet: bool,

    /// Plain glyphs instead of colored ones.
    ///
    /// Any non-empty `NO_COLOR` other than `0`/`false` turns this on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file read instead of the platform default (`stitch config path`).
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    /// How the run report is printed; `auto` falls back to `output.format`.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Report format"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else human on a terminal and plain when piped.
    #[default]
    Auto,
    /// Colored glyphs.
    Human,
    /// No ANSI codes.
    Plain,
    /// The run report as one JSON document on stdout.
    Json,
}
