//! Command-line interface definitions for pressroom

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the pressroom application
#[derive(Parser)]
#[command(name = "pressroom")]
#[command(version)]
#[command(about = "Content pipeline for the Pressroom publishing console", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for pressroom
#[derive(Subcommand)]
pub enum Commands {
    /// Publish every draft in a content directory to Markdown post records
    Build {
        /// Content directory containing draft files and pressroom.toml
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Output directory for rendered posts
        #[arg(short, long, default_value = "public")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report slug and derived fields for a single draft
    Inspect {
        /// Draft file to inspect
        file: PathBuf,
    },

    /// Run the publish gate over a content directory
    Validate {
        /// Content directory containing draft files
        #[arg(value_name = "PATH", default_value = ".")]
        input: PathBuf,

        /// Show passing drafts as well as failures
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the URL slug for a title
    Slug {
        /// Title to slugify
        title: String,
    },
}
