//! CLI subcommand definitions
//!
//! Each subcommand selects a view over the same statistics.

use clap::{Args, Subcommand};

/// Transcript inputs shared by every view
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct InputArgs {
    /// Transcript files or directories of *.txt exports ("-" or nothing reads stdin)
    #[arg(value_name = "PATH")]
    pub(crate) paths: Vec<String>,
}

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show conversation totals and superlatives (default)
    Summary(InputArgs),
    /// Show per-user statistics
    Users(InputArgs),
    /// Show messages per hour, weekday, date and author
    Activity(InputArgs),
}

/// Normalized view selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Summary,
    Users,
    Activity,
}

/// Split the parsed command into its view and input paths
///
/// Without a subcommand the top-level paths feed the summary view.
pub(crate) fn parse_command(cmd: Option<Commands>, top_level: InputArgs) -> (View, Vec<String>) {
    match cmd {
        Some(Commands::Summary(input)) => (View::Summary, input.paths),
        Some(Commands::Users(input)) => (View::Users, input.paths),
        Some(Commands::Activity(input)) => (View::Activity, input.paths),
        None => (View::Summary, top_level.paths),
    }
}
