//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for relabel using the `clap` crate.
//!
//! # Commands
//!
//! - *(none)*: Label the images in `FOLDER` (or the configured default folder)
//! - **config**: Read and write configuration settings
//! - **list**: Show the order a session would visit a folder in, with labels
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use relabel::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["relabel", "list", "/data/glyphs"]);
//! assert!(matches!(cli.command, Some(Commands::List { .. })));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., `submit_length=2`)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `default_folder`)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "relabel")]
#[command(about = "Step through numbered images and fix their labels", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Folder of images to label (defaults to `default_folder` from config)
    #[arg(value_name = "FOLDER")]
    pub folder: Option<PathBuf>,

    /// Exact label length required on submit (overrides config)
    #[arg(short = 's', long = "submit-length", value_name = "N")]
    pub submit_length: Option<usize>,

    /// Longest line accepted from the keyboard (overrides config)
    #[arg(short = 'i', long = "input-length", value_name = "N")]
    pub input_length: Option<usize>,

    /// Open each image in the system viewer (overrides config)
    #[arg(short = 'o', long = "open")]
    pub open: bool,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Print debug logs to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List a folder's images in labeling order
    #[command(visible_alias = "l")]
    List {
        /// Folder to list (defaults to `default_folder` from config)
        #[arg(value_name = "FOLDER")]
        folder: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folder_and_overrides() {
        let cli = Cli::parse_from([
            "relabel",
            "/data/glyphs",
            "--submit-length",
            "2",
            "-i",
            "6",
            "--open",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.folder, Some(PathBuf::from("/data/glyphs")));
        assert_eq!(cli.submit_length, Some(2));
        assert_eq!(cli.input_length, Some(6));
        assert!(cli.open);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["relabel"]);
        assert!(cli.command.is_none());
        assert!(cli.folder.is_none());
        assert!(cli.submit_length.is_none());
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::parse_from(["relabel", "config", "set", "quiet=true"]);
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { setting },
            }) => assert_eq!(setting, "quiet=true"),
            other => panic!("Expected config set, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_get_and_path() {
        let cli = Cli::parse_from(["relabel", "config", "get", "input_length"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { command: ConfigCommands::Get { ref key } }) if key == "input_length"
        ));

        let cli = Cli::parse_from(["relabel", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { command: ConfigCommands::Path })
        ));
    }

    #[test]
    fn test_parse_list_with_global_quiet() {
        let cli = Cli::parse_from(["relabel", "list", "/data/glyphs", "-q"]);
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::List { folder }) => assert_eq!(folder, Some(PathBuf::from("/data/glyphs"))),
            other => panic!("Expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_length_rejected() {
        assert!(Cli::try_parse_from(["relabel", "--submit-length", "x"]).is_err());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::parse_from(["relabel", "-v", "/data"]);
        assert!(cli.verbose);
    }
}
