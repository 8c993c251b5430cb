//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Portfolio content and palette tool.
#[derive(Parser, Debug)]
#[command(name = "folio", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query project content.
    Projects(ProjectsCommand),

    /// Print primary and secondary shade ramps for a brand color.
    Palette {
        /// Base color (hex, rgb(), hsl()); defaults to `palette.base_color`.
        color: Option<String>,

        /// Print JSON instead of CSS custom properties.
        #[arg(long)]
        json: bool,
    },

    /// Write the static project listing as JSON.
    Export {
        /// Output file; defaults to `export.output`.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Configuration operations.
    Config(ConfigCommand),

    /// Print version information.
    Version,
}

/// Project subcommands.
#[derive(Parser, Debug)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub command: ProjectsAction,
}

/// Available project subcommands.
#[derive(Subcommand, Debug)]
pub enum ProjectsAction {
    /// List projects newest first, one page at a time.
    List {
        /// Page number, starting at 1.
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Items per page; defaults to `content.per_page`.
        #[arg(long)]
        per_page: Option<usize>,

        /// Only list projects with this tag.
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List featured projects.
    Featured,

    /// Show one project with its rendered body and neighbors.
    Show {
        /// File name without extension.
        slug: String,
    },

    /// List tags with project counts.
    Tags,
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "content.per_page").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
