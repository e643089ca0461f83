//! CLI module for milestone-tracker
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::TaskStatus;

/// milestone-tracker - Drive production milestones and warranty fee checks for order items
#[derive(Parser, Debug)]
#[command(name = "milestone-tracker")]
#[command(version)]
#[command(about = "Drive production milestones and warranty fee checks for order items")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

impl Cli {
    /// Log filter implied by --verbose / --quiet
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .milestones directory with a default config.json
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Validate and store an order item progression from a JSON file
    Register {
        /// Path to the progression JSON file
        file: PathBuf,

        /// Replace an already registered order item
        #[arg(long)]
        force: bool,
    },

    /// Show progress of every stored order item
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show milestones, tasks and lock state of an order item
    Show {
        /// Order item ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a task to a new status
    Transition {
        /// Order item ID
        id: String,

        /// Task ID
        task: String,

        /// Target status (pending, in_progress, done, cancelled, pass, fail)
        status: TaskStatus,

        /// Completion note (terminal statuses only)
        #[arg(long)]
        note: Option<String>,

        /// Completion image reference (terminal statuses only)
        #[arg(long)]
        image: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate and validate a warranty claim file
    Warranty {
        /// Path to the claim JSON file
        file: PathBuf,

        /// Override the configured warranty round threshold
        #[arg(long)]
        threshold: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
