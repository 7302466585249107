//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Pinetree - pick audio formats from a menu and batch-convert a directory tree
#[derive(Parser, Debug)]
#[command(name = "pinetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Starting directory, searched recursively for input files.
    /// Defaults to the current working directory.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Get the starting directory, falling back to the current working directory.
    pub fn start_directory(&self) -> std::io::Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
