//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JSON:API pagination CLI
#[derive(Parser, Debug)]
#[command(name = "jsonapi-pagination")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print pagination meta and links for a collection of COUNT records
    Links {
        /// Request URL the links are derived from
        #[arg(long, default_value = "")]
        url: String,

        /// Total number of records
        #[arg(long)]
        count: u64,

        /// Page to show (number or "last"); overrides the URL's page parameter
        #[arg(long)]
        page: Option<String>,

        /// Page size; overrides the URL's page size parameter
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Paginate a JSON array file and print the envelope
    Paginate {
        /// JSON file holding an array of records
        #[arg(short, long)]
        input: PathBuf,

        /// Request URL (with page / page_size parameters)
        #[arg(long)]
        url: Option<String>,
    },

    /// Serve a JSON array file as a paginated collection at /records
    Serve {
        /// JSON file holding an array of records
        #[arg(short, long)]
        input: PathBuf,

        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides the config file)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the effective configuration as YAML
    Settings,
}
