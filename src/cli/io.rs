use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::shell::CliError;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CliError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt the user for free-form text input.
pub fn prompt_text(prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Block until the user acknowledges, so screen output survives redraws.
pub fn pause() -> Result<(), CliError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)?;
    Ok(())
}
