//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gettrackers")]
#[command(
    version,
    about = "Download, filter, and output tracker URLs grouped by domain",
    long_about = "gettrackers downloads tracker URLs from configurable sources, filters them \
                  using a blocklist, and outputs them grouped by domain in random order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default action (same as `groups`)
    #[command(flatten)]
    pub groups: GroupsArgs,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsArgs {
    /// Output N blank lines before tracker groups
    #[arg(
        short = 'p',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub start_priority: i64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Output grouped tracker URLs (default command)
    Groups(GroupsArgs),

    /// Force download/update the cached sources file
    Fetch,

    /// Show cached sources or blocklist
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },

    /// Add a pattern to the blocklist (skipped if already present)
    Block {
        /// Substring to block; surrounding whitespace is trimmed and an
        /// empty pattern is rejected
        pattern: String,
    },

    /// Get or set configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShowTarget {
    /// Display the cached source file as downloaded
    Sources,
    /// Display blocklist entries
    Blocklist,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show all config values, or one value if a key is given
    Get {
        /// Config key (source_urls)
        key: Option<String>,
    },
    /// Set a config value; source_urls takes comma-separated URLs
    Set {
        /// Config key (source_urls)
        key: String,
        /// New value
        value: String,
    },
}
