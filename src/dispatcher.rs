//! Menu dispatcher
//!
//! Runs one launcher session from start to finish:
//! 1. probe for a Python interpreter
//! 2. locate the installer script
//! 3. show the menu and read a choice
//! 4. decide what to run (asking for confirmation on source builds)
//! 5. run the installer and report its exit code
//!
//! Environment problems (steps 1 and 2) stop the run before any input is read.

use std::path::PathBuf;

use termcolor::WriteColor;

use crate::config::{ScriptLocation, Settings};
use crate::decision::{Decision, decide};
use crate::error::LauncherError;
use crate::interpreter::InterpreterProbe;
use crate::launcher::{Invocation, Launcher};
use crate::platform;
use crate::prompt::Prompter;
use crate::script;
use crate::ui;

/// How a session ended when no error occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The installer exited with status 0
    Succeeded,
    /// The installer exited with a nonzero status
    Failed { code: i32 },
    /// The user declined the source build
    Cancelled,
    /// `--dry-run`: the command was shown but not run
    Previewed(Invocation),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Failed { code } => *code,
            Outcome::Succeeded | Outcome::Cancelled | Outcome::Previewed(_) => 0,
        }
    }
}

pub struct Dispatcher<P, Q, L, W> {
    settings: Settings,
    probe: P,
    prompter: Q,
    launcher: L,
    out: W,
    menu_shown: bool,
}

impl<P, Q, L, W> Dispatcher<P, Q, L, W>
where
    P: InterpreterProbe,
    Q: Prompter,
    L: Launcher,
    W: WriteColor,
{
    pub fn new(settings: Settings, probe: P, prompter: Q, launcher: L, out: W) -> Self {
        Self {
            settings,
            probe,
            prompter,
            launcher,
            out,
            menu_shown: false,
        }
    }

    /// Run the session and return its outcome
    pub fn run(&mut self) -> Result<Outcome, LauncherError> {
        let interpreter = self.probe.resolve(&self.settings.interpreters)?;
        let script = self.script_path()?;
        log::info!(
            "Using interpreter {} with installer {}",
            interpreter.display(),
            script.display()
        );

        ui::show_banner(&mut self.out, &interpreter, &script);
        ui::show_menu(&mut self.out);
        self.menu_shown = true;

        let answer = self.prompter.read_line(ui::CHOICE_PROMPT)?;
        let prompter = &mut self.prompter;
        let decision = decide(&answer, || prompter.read_line(ui::SOURCE_CONFIRM_PROMPT))?;
        log::debug!("Menu answer {:?} -> {:?}", answer, decision);

        let choice = match decision {
            Decision::Invoke(choice) => choice,
            Decision::Cancelled => {
                ui::show_cancelled(&mut self.out);
                return Ok(Outcome::Cancelled);
            }
            Decision::Invalid(input) => return Err(LauncherError::InvalidChoice(input)),
        };

        let invocation = Invocation::new(interpreter, script, choice.flags());
        if self.settings.dry_run {
            ui::show_preview(&mut self.out, &invocation);
            return Ok(Outcome::Previewed(invocation));
        }

        let code = self.launcher.launch(&invocation)?;
        if code == 0 {
            ui::show_success(&mut self.out);
            Ok(Outcome::Succeeded)
        } else {
            ui::show_failure(&mut self.out, code);
            Ok(Outcome::Failed { code })
        }
    }

    /// Run the session, report any error, pause if configured, and return
    /// the process exit code
    pub fn run_to_exit(&mut self) -> i32 {
        let code = match self.run() {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => {
                log::debug!("Launcher error: {e:?}");
                ui::show_error(&mut self.out, &e.to_string());
                e.exit_code()
            }
        };

        if self.menu_shown && self.settings.pause_on_exit {
            let _ = self.out.flush();
            if let Err(e) = self.prompter.pause(platform::PAUSE_MESSAGE) {
                log::debug!("Pause skipped: {e}");
            }
        }

        code
    }

    pub fn into_parts(self) -> (Q, L, W) {
        (self.prompter, self.launcher, self.out)
    }

    fn script_path(&self) -> Result<PathBuf, LauncherError> {
        match &self.settings.script {
            ScriptLocation::File(path) => script::locate_file(path),
            ScriptLocation::Dir { dir, name } => script::locate(dir, name),
            ScriptLocation::LauncherDir { name } => script::locate(&script::launcher_dir()?, name),
        }
    }
}
