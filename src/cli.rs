use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI tool to normalize identifier-like text into a standard case convention
#[derive(Parser, Debug)]
#[command(name = "keycase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert values to camelCase, kebab-case or dot.case
    Convert {
        /// Target style: camel, kebab or dot (overrides the config file)
        #[arg(short, long)]
        style: Option<String>,

        /// Path to the configuration file
        #[arg(short, long, default_value = "keycase.toml")]
        config: PathBuf,

        /// Parse each value as a JSON document instead of raw text
        #[arg(short, long, default_value = "false")]
        json: bool,

        /// Enable verbose output
        #[arg(short, long, default_value = "false")]
        verbose: bool,

        /// Values to convert; read from stdin when empty
        values: Vec<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(short, long, default_value = "keycase.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(short, long, default_value = "false")]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
