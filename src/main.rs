//! Relabel CLI application entry point
//!
//! Steps through a folder of sequentially numbered images, showing one image
//! at a time with its current label, and renames each file to the label the
//! operator types.
//!
//! # Usage
//!
//! ```bash
//! # Label the images in a folder
//! relabel ~/scans/batch-07
//!
//! # Label the configured default folder, opening each image in the viewer
//! relabel --open
//!
//! # Allow two-character labels
//! relabel ~/scans/batch-07 --submit-length 2
//!
//! # Show the order images would be visited in
//! relabel list ~/scans/batch-07
//!
//! # Configuration
//! relabel config set default_folder=/data/scans
//! relabel config get submit_length
//! ```
//!
//! # Configuration
//!
//! On first run, relabel will prompt for initial setup. Configuration is
//! stored in the user's config directory (`~/.config/relabel/config.toml` on
//! Linux).
//!
//! # Logging
//!
//! Diagnostics go to stderr. `RELABEL_LOG` takes a `tracing` filter
//! (e.g. `RELABEL_LOG=relabel=debug`); `-v` is shorthand for `debug`.

use std::path::{Path, PathBuf};

use colored::Colorize;
use relabel::{
    RelabelError,
    cli::{Cli, Commands, ConfigCommands},
    config::RelabelConfig,
    naming::{NamingStrategy, SequenceNaming},
    session::LabelSession,
    ui::{DialoguerInput, Shell, ShellOptions, StdoutWriter, SystemViewer},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, RelabelError>;

const LOG_ENV: &str = "RELABEL_LOG";

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the folder to work on from the CLI argument or the config default
///
/// # Errors
/// Returns `RelabelError::InvalidInput` if neither is set, or `IoError` if the
/// path cannot be made absolute.
fn resolve_folder(folder: Option<&Path>, config: &RelabelConfig) -> Result<PathBuf> {
    let folder = folder
        .or(config.default_folder.as_deref())
        .ok_or_else(|| {
            RelabelError::InvalidInput(
                "No folder given. Pass a FOLDER or use 'relabel config set default_folder=<path>'."
                    .into(),
            )
        })?;

    Ok(std::path::absolute(folder)?)
}

/// Build the naming strategy described by the configuration
fn naming_for(config: &RelabelConfig) -> Result<SequenceNaming> {
    Ok(SequenceNaming::new()?.with_extensions(config.naming.extensions.iter()))
}

/// Handle the interactive labeling session
///
/// # Errors
/// Returns `RelabelError` if the folder cannot be loaded or terminal input fails.
fn handle_label_command(config: &RelabelConfig, folder: &Path, quiet: bool) -> Result<()> {
    let mut session = LabelSession::new(naming_for(config)?, config.session_options());
    session.load_folder(folder)?;

    if !quiet {
        println!(
            "{} {} ({} image(s)). Type :help for commands.",
            "Labeling".bold(),
            folder.display(),
            session.cursor().len()
        );
    }

    let input = DialoguerInput::new();
    let output = StdoutWriter::new();
    let viewer = SystemViewer;
    let options = ShellOptions {
        input_length: config.input_length,
        quiet,
    };

    let mut shell = Shell::new(session, &input, &output, options);
    if config.open_images {
        shell = shell.with_viewer(&viewer);
    }
    shell.run()?;

    if !quiet {
        let labeled = shell.session().history().entries().iter().map(|e| e.count).sum::<usize>();
        println!("Accepted {labeled} label(s)");
    }
    Ok(())
}

/// Print a folder's images in visiting order with their labels
///
/// # Errors
/// Returns `RelabelError` if the folder cannot be listed.
fn handle_list_command(config: &RelabelConfig, folder: &Path, quiet: bool) -> Result<()> {
    let naming = naming_for(config)?;
    let names = naming.list_images(folder)?;

    if names.is_empty() {
        if !quiet {
            println!("No images found in {}", folder.display());
        }
        return Ok(());
    }

    for (index, name) in names.iter().enumerate() {
        let label = naming.extract_label(name).ok();
        if quiet {
            println!("{name}");
        } else {
            match label {
                Some(label) => println!("{:>5}  {name}  {}", index + 1, label.green()),
                None => println!("{:>5}  {name}  {}", index + 1, "(no label)".yellow()),
            }
        }
    }
    Ok(())
}

/// Handle config management commands
///
/// # Errors
/// Returns `RelabelError` for malformed settings, unknown keys, or if the
/// configuration cannot be saved.
fn handle_config_command(mut config: RelabelConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                RelabelError::InvalidInput("Invalid format. Use: relabel config set key=value".into())
            })?;
            let key = key.trim();

            config.set(key, value.trim())?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", RelabelConfig::config_path()?.display());
        }
    }
    Ok(())
}

/// Configuration with command-line overrides applied
///
/// A `--submit-length` above the configured input length raises the input
/// length with it.
///
/// # Errors
/// Returns `RelabelError::ConfigError` if loading or setup fails, or if the
/// overrides are invalid.
fn effective_config(cli: &Cli) -> Result<RelabelConfig> {
    let mut config = RelabelConfig::load_or_setup()?;
    if let Some(submit_length) = cli.submit_length {
        config.submit_length = submit_length;
        config.input_length = config.input_length.max(submit_length);
    }
    if let Some(input_length) = cli.input_length {
        config.input_length = input_length;
    }
    config.open_images |= cli.open;
    config.quiet |= cli.quiet;
    config.validate()?;

    tracing::debug!(?config, "effective configuration");
    Ok(config)
}

/// Main entry point for the relabel application
///
/// # Errors
/// Returns `RelabelError` if configuration, listing, or the session fails.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Config { command }) => {
            let config = RelabelConfig::load()?;
            let quiet = cli.quiet || config.quiet;
            handle_config_command(config, command, quiet)
        }
        Some(Commands::List { folder }) => {
            let config = effective_config(&cli)?;
            let folder = resolve_folder(folder.as_deref(), &config)?;
            handle_list_command(&config, &folder, config.quiet)
        }
        None => {
            let config = effective_config(&cli)?;
            let folder = resolve_folder(cli.folder.as_deref(), &config)?;
            handle_label_command(&config, &folder, config.quiet)
        }
    }
}
