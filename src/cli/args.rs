//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Storefront navigation tree builder: ordered, home-aware category trees from raw listings
#[derive(Parser, Debug)]
#[command(name = "navtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding the local .navtree.toml (default: cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "NAVTREE_CONFIG_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the display tree and print it as JSON
    Build {
        /// Raw category listing (JSON, `-` for stdin; default: config `source`)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the display tree
    Tree {
        /// Raw category listing (JSON, `-` for stdin; default: config `source`)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// List top-level categories promoted to the home section
    Home {
        /// Raw category listing (JSON, `-` for stdin; default: config `source`)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Resolve the sort order for a title and id
    Order {
        /// Category title
        #[arg(allow_hyphen_values = true)]
        title: String,
        /// Fallback category id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
