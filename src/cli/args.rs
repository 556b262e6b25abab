//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::core::TimestampPolicy;

use super::commands::{Commands, InputArgs};

/// Emoticons and link domains listed per histogram unless overridden
pub(crate) const DEFAULT_TOP: usize = 3;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "chatstats")]
#[command(about = "Superlatives and activity statistics for exported chat transcripts", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Inputs for the default summary view
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Restrict emoticon, link and user statistics to one user (summary and users views)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) user: Option<String>,

    /// Number of emoticons and link domains to list
    #[arg(short, long, global = true, value_name = "N")]
    pub(crate) top: Option<usize>,

    /// Skip messages with malformed timestamps instead of failing
    #[arg(long, global = true)]
    pub(crate) skip_invalid_dates: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Compact output (fewer columns)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Enable debug output (skipped links and messages)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.skip_invalid_dates && config.skip_invalid_dates {
            self.skip_invalid_dates = true;
        }

        // Only override color if CLI is at default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.top.is_none() {
            self.top = config.top;
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn top(&self) -> usize {
        self.top.unwrap_or(DEFAULT_TOP)
    }

    pub(crate) fn timestamp_policy(&self) -> TimestampPolicy {
        if self.skip_invalid_dates {
            TimestampPolicy::Skip
        } else {
            TimestampPolicy::Strict
        }
    }

    /// JSON output keeps stderr quiet too
    pub(crate) fn is_quiet(&self) -> bool {
        self.quiet || self.json
    }
}
