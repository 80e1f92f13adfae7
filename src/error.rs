//! Launcher error taxonomy
//!
//! Every variant is terminal for the current run. Nothing is retried; the
//! dispatcher prints the message and exits with [`LauncherError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a launcher run before or instead of a delegated invocation.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// None of the interpreter candidates resolved on the search path
    #[error("Python interpreter not found (tried: {})", .candidates.join(", "))]
    InterpreterNotFound { candidates: Vec<String> },

    /// The directory holding the launcher executable could not be determined
    #[error("Could not determine launcher directory: {0}")]
    LauncherDir(#[source] std::io::Error),

    /// The delegated installer script is missing
    #[error("Installer script not found: {}", .path.display())]
    ScriptNotFound { path: PathBuf },

    /// The menu choice is outside the dispatch table
    #[error("Invalid choice '{0}'. Please run again and select 1-6.")]
    InvalidChoice(String),

    /// Reading user input failed or was interrupted
    #[error("Prompt cancelled: {0}")]
    Prompt(String),

    /// The delegated process could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LauncherError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}
