//! Unix adapter

use std::fs::File;
use std::io;
use std::os::fd::AsFd;
use std::os::unix::process::ExitStatusExt;
use std::process::{Child, ExitStatus};

use nix::sys::signal::{SigHandler, Signal, signal};

pub const DEFAULT_INTERPRETERS: &[&str] = &["python3", "python"];

pub const PAUSE_MESSAGE: &str = "Press Enter to exit...";

/// Exit code, or `128 + signal` when the child was killed by a signal
pub fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

/// Duplicate of fd 0 with no userspace buffer in front of it
pub fn unbuffered_stdin() -> io::Result<File> {
    Ok(File::from(io::stdin().as_fd().try_clone_to_owned()?))
}

/// Wait for `child` while Ctrl-C only reaches the child.
///
/// SIGINT is ignored after the spawn so the child keeps the default
/// disposition; the previous handler is restored once the child exits.
pub fn wait_child(child: &mut Child) -> io::Result<ExitStatus> {
    // SAFETY: SigIgn installs no Rust handler code
    let previous = match unsafe { signal(Signal::SIGINT, SigHandler::SigIgn) } {
        Ok(previous) => Some(previous),
        Err(e) => {
            log::warn!("Could not ignore SIGINT while waiting for installer: {e}");
            None
        }
    };

    let status = child.wait();

    if let Some(previous) = previous {
        // SAFETY: restores the disposition that was active before
        if let Err(e) = unsafe { signal(Signal::SIGINT, previous) } {
            log::warn!("Could not restore SIGINT handler: {e}");
        }
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_exit_codes_pass_through() {
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        // wait status encodes the exit code in the high byte
        assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
    }

    #[test]
    fn signals_map_above_128() {
        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }
}
