//! Platform adapter
//!
//! The only places where the launcher behaves differently per OS:
//! - interpreter names searched by default
//! - wording of the final acknowledgement prompt
//! - raw stdin access and waiting on the installer
//! - turning a child's exit status into a numeric code

use std::fs::File;
use std::io;
use std::process::{Child, ExitStatus};

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        use windows as platform;
    } else {
        mod unix;
        use unix as platform;
    }
}

/// Interpreter names searched in order when nothing is configured
pub const DEFAULT_INTERPRETERS: &[&str] = platform::DEFAULT_INTERPRETERS;

/// Text shown while waiting for the final acknowledgement
pub const PAUSE_MESSAGE: &str = platform::PAUSE_MESSAGE;

/// Numeric exit code of a finished child process
pub fn exit_code(status: ExitStatus) -> i32 {
    platform::exit_code(status)
}

/// Standard input without buffering, sharing its position with children
pub fn unbuffered_stdin() -> io::Result<File> {
    platform::unbuffered_stdin()
}

/// Block until the installer exits, keeping the launcher alive on Ctrl-C
pub fn wait_child(child: &mut Child) -> io::Result<ExitStatus> {
    platform::wait_child(child)
}
