//! CLI 模块

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskgrove")]
#[command(version)]
#[command(about = "Interactive command-line task manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive session (default)
    Session,
}
