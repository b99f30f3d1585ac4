//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Safemark.
#[derive(Debug, Clone, Parser)]
#[command(name = "safemark", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file (stdin when omitted)
    pub input: Option<PathBuf>,

    /// HTML output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path is given but does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input
            && !input.exists()
        {
            bail!("Input file does not exist: {}", input.display());
        }

        Ok(())
    }
}
