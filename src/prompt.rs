//! Reading answers from the user
//!
//! On a terminal the prompts go through `inquire`. When stdin is piped (CI,
//! scripted installs) plain lines are read instead, and end of input counts
//! as an empty answer. Piped lines are read one byte at a time so everything
//! after the answer is still there for the installer script.

use std::io::{self, BufRead, IsTerminal, Read, Write};

use inquire::Text;
use inquire::error::InquireError;

use crate::error::LauncherError;
use crate::platform;

/// Source of one-line answers
pub trait Prompter {
    /// Show `message` and read one line of input
    fn read_line(&mut self, message: &str) -> Result<String, LauncherError>;

    /// Block until the user acknowledges
    fn pause(&mut self, message: &str) -> Result<(), LauncherError> {
        self.read_line(message).map(|_| ())
    }
}

/// Interactive prompts on a terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, message: &str) -> Result<String, LauncherError> {
        Text::new(message).prompt().map_err(prompt_error)
    }
}

fn prompt_error(e: InquireError) -> LauncherError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            LauncherError::Prompt("interrupted by user".to_string())
        }
        other => LauncherError::Prompt(other.to_string()),
    }
}

/// Line-based prompts over any reader/writer pair
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, message: &str) -> Result<String, LauncherError> {
        write!(self.output, "{message} ")
            .and_then(|_| self.output.flush())
            .map_err(|e| LauncherError::Prompt(e.to_string()))?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .map_err(|e| LauncherError::Prompt(e.to_string()))?;

        // the user's newline never reaches the terminal when input is piped
        if !line.ends_with('\n') {
            let _ = writeln!(self.output);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// `BufRead` over a reader that never takes more than one byte ahead.
///
/// `read_line` therefore stops right after the newline, like `read` in sh.
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
    byte: [u8; 1],
    filled: bool,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            byte: [0],
            filled: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ByteReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let available = self.fill_buf()?;
        if available.is_empty() {
            return Ok(0);
        }
        buf[0] = available[0];
        self.consume(1);
        Ok(1)
    }
}

impl<R: Read> BufRead for ByteReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while !self.filled {
            match self.inner.read(&mut self.byte) {
                Ok(0) => return Ok(&[]),
                Ok(_) => self.filled = true,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(&self.byte)
    }

    fn consume(&mut self, amt: usize) {
        if amt > 0 {
            self.filled = false;
        }
    }
}

/// Prompter for the process stdin, interactive when it is a terminal
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        return Box::new(TerminalPrompter);
    }

    match platform::unbuffered_stdin() {
        Ok(stdin) => Box::new(LinePrompter::new(ByteReader::new(stdin), io::stdout())),
        Err(e) => {
            log::warn!("Unbuffered stdin unavailable, installer may miss piped input: {e}");
            Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
        }
    }
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn read_line(&mut self, message: &str) -> Result<String, LauncherError> {
        (**self).read_line(message)
    }

    fn pause(&mut self, message: &str) -> Result<(), LauncherError> {
        (**self).pause(message)
    }
}
