//! CLI module
//!
//! Command-line interface for computing pagination links and serving
//! paginated collections.
//!
//! # Commands
//!
//! - `links` - Print meta and links for a collection size and request URL
//! - `paginate` - Paginate a JSON array file and print the envelope
//! - `serve` - Serve a JSON array file as a paginated collection over HTTP
//! - `settings` - Print the effective configuration

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::{load_records, Runner};
pub use server::{router, serve};
