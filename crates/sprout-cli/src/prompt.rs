//! Interactive prompts.
//!
//! Both prompts degrade when there is no terminal to ask: the name prompt
//! yields nothing and the retry prompt answers "no".  Without the
//! `interactive` feature they never ask at all.

use tracing::debug;

use sprout_core::prelude::{NameValidator, RecoveryPrompt, SproutError};

use crate::output::OutputManager;

/// Check what the user typed at the name prompt.
///
/// The name is the final component of the path the input resolves to, so
/// `.` is checked as the current directory's name.
#[cfg_attr(not(feature = "interactive"), allow(dead_code))]
pub fn validate_project_input(input: &str) -> Result<(), String> {
    let resolved = crate::commands::create::resolve_target(input.trim())
        .map_err(|e| format!("Invalid project name: {e}"))?;
    let name = resolved
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    match NameValidator::validate(name).first_problem() {
        Some(problem) => Err(format!("Invalid project name: {problem}")),
        None => Ok(()),
    }
}

/// Ask for the project directory, offering `initial` as editable text.
///
/// Returns `None` when the prompt cannot be shown.
#[cfg(feature = "interactive")]
pub fn ask_project_directory(initial: &str) -> Option<String> {
    let answer = dialoguer::Input::<String>::new()
        .with_prompt("What is your project named?")
        .with_initial_text(initial)
        .validate_with(|input: &String| validate_project_input(input))
        .interact_text();

    match answer {
        Ok(directory) => Some(directory),
        Err(e) => {
            debug!(error = %e, "Project name prompt unavailable");
            None
        }
    }
}

#[cfg(not(feature = "interactive"))]
pub fn ask_project_directory(_initial: &str) -> Option<String> {
    debug!("Built without interactive prompts");
    None
}

/// Asks on the terminal whether a download failure should be retried.
pub struct TerminalRecoveryPrompt {
    output: OutputManager,
}

impl TerminalRecoveryPrompt {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }

    #[cfg(feature = "interactive")]
    fn confirm(&self) -> bool {
        let answer = dialoguer::Confirm::new()
            .with_prompt("Do you want to use the default template instead?")
            .default(true)
            .interact();

        answer.unwrap_or_else(|e| {
            debug!(error = %e, "Retry prompt unavailable, declining");
            false
        })
    }

    #[cfg(not(feature = "interactive"))]
    fn confirm(&self) -> bool {
        false
    }
}

impl RecoveryPrompt for TerminalRecoveryPrompt {
    fn confirm_fallback(&self, error: &SproutError) -> bool {
        debug!(error = %error, "Offering retry");
        if let Err(e) = self.output.warning(
            "Could not download because of a connectivity issue between your machine and the package registry.",
        ) {
            debug!(error = %e, "Could not write retry warning");
        }
        self.confirm()
    }
}
