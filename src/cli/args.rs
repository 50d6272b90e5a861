//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::report::Order;

/// Level-order binary tree: insertion, traversals and structural classification
#[derive(Parser, Debug)]
#[command(name = "lotree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Report format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Do not draw the tree shape
    #[arg(long, global = true)]
    pub no_tree: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the sample trees and show traversals and classification
    Demo,

    /// Insert values in level order and show the full report
    Build {
        /// Integer values, inserted left to right
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Print a single traversal
    Traverse {
        /// Traversal order
        #[arg(value_enum)]
        order: Order,
        /// Integer values, inserted left to right
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Print which shape properties hold
    Classify {
        /// Integer values, inserted left to right
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
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
    /// Show effective configuration
    Show,
    /// Show the global config file location
    Path,
    /// Print a commented config template
    Template,
}
