//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when relabel is run for the first time.

use super::RelabelConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the default folder and label length
///
/// Guides the user through creating their first configuration:
/// 1. Prompts for a default image folder (may be left empty)
/// 2. Prompts for the number of characters in a label (default: 1)
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The entered values are inconsistent
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<RelabelConfig, ConfigError> {
    println!("Welcome to relabel! Let's set up a few defaults.\n");

    let theme = ColorfulTheme::default();

    let folder: String = Input::with_theme(&theme)
        .with_prompt("Default image folder (leave empty to always pass one)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let submit_length: usize = Input::with_theme(&theme)
        .with_prompt("Characters per label")
        .default(1)
        .validate_with(|n: &usize| if *n > 0 { Ok(()) } else { Err("must be at least 1") })
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = RelabelConfig::default();
    let folder = folder.trim();
    config.default_folder = (!folder.is_empty()).then(|| PathBuf::from(folder));
    config.submit_length = submit_length;
    config.input_length = config.input_length.max(submit_length);
    config.validate()?;

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
