//! Decide what to invoke from the user's answers
//!
//! Nothing here touches a process or a terminal, so the dispatch rules can be
//! tested with plain strings.

use crate::error::LauncherError;
use crate::menu::MenuChoice;

/// What the dispatcher should do with a menu answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Run the installer script with this choice's flags
    Invoke(MenuChoice),
    /// The user declined the confirmation
    Cancelled,
    /// The answer is not a menu key
    Invalid(String),
}

/// Map a menu answer to a decision.
///
/// `confirm` is only called when the choice requires confirmation, so the
/// second prompt never appears for the other options.
pub fn decide<F>(input: &str, confirm: F) -> Result<Decision, LauncherError>
where
    F: FnOnce() -> Result<String, LauncherError>,
{
    let Some(choice) = MenuChoice::parse(input) else {
        return Ok(Decision::Invalid(input.trim().to_string()));
    };

    if choice.requires_confirmation() && !is_affirmative(&confirm()?) {
        return Ok(Decision::Cancelled);
    }

    Ok(Decision::Invoke(choice))
}

/// Only a single `y` or `Y` counts as yes
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
