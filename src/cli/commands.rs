//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "namedropper")]
#[command(about = "Generate EAD/TEI name tags from authority records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the markup for a named entity
    Tag {
        /// Text content of the tag (e.g., "Jane Austen")
        text: String,

        /// Document format (ead, tei); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,

        /// Entity kind (personal, corporate, geographic)
        #[arg(short, long, required_unless_present = "resource")]
        kind: Option<String>,

        /// Authority URI, used by TEI
        #[arg(long)]
        uri: Option<String>,

        /// Authority record identifier, used by EAD
        #[arg(long = "id", value_name = "ID")]
        authority_id: Option<String>,

        /// JSON authority resource file ('-' for stdin)
        #[arg(short, long, conflicts_with_all = ["kind", "uri", "authority_id"])]
        resource: Option<PathBuf>,
    },

    /// Show the tag names and types used for each format and kind
    Scheme {
        /// Only show this format
        #[arg(short, long)]
        format: Option<String>,
    },

    /// View configuration
    Config {
        /// Config key to get
        key: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
