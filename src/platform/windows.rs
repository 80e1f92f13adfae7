//! Windows adapter

use std::fs::File;
use std::io;
use std::os::windows::io::AsHandle;
use std::process::{Child, ExitStatus};

/// `py` is the launcher installed by the python.org Windows installer
pub const DEFAULT_INTERPRETERS: &[&str] = &["python", "py"];

pub const PAUSE_MESSAGE: &str = "Press Enter to continue . . .";

pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Duplicate of the stdin handle with no userspace buffer in front of it
pub fn unbuffered_stdin() -> io::Result<File> {
    Ok(File::from(io::stdin().as_handle().try_clone_to_owned()?))
}

// TODO: install a console control handler so Ctrl-C during the installer
// leaves the launcher alive to report the exit code, as on Unix.
pub fn wait_child(child: &mut Child) -> io::Result<ExitStatus> {
    child.wait()
}
