//! CLI module for chirp
//!
//! Provides subcommands for running the backend:
//! - `serve`: run the HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// chirp - a small microblogging backend
#[derive(Parser)]
#[command(name = "chirp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
