//! Terminal output: banner, menu, and status lines
//!
//! All functions write to a [`WriteColor`] so tests can capture the text with
//! `termcolor::NoColor`. Write failures are ignored; there is nowhere better
//! to report them.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::launcher::Invocation;
use crate::menu::MENU;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub const SUCCESS_MESSAGE: &str = "Operation completed successfully!";
pub const FAILURE_MESSAGE: &str = "Operation failed with errors.";
pub const CANCELLED_MESSAGE: &str = "Installation cancelled.";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-6):";
pub const SOURCE_CONFIRM_PROMPT: &str =
    "Building from source can take a long time and needs a compiler toolchain. Continue? (y/N):";

fn colored(out: &mut impl WriteColor, color: Color, bold: bool, text: &str) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = writeln!(out, "{text}");
    let _ = out.reset();
}

/// Banner with the resolved interpreter and script
pub fn show_banner(out: &mut impl WriteColor, interpreter: &Path, script: &Path) {
    colored(out, Color::Cyan, false, &format!("\n{RULE}"));
    colored(out, Color::Cyan, true, "\n                 S U 2   I N S T A L L E R");
    colored(out, Color::Cyan, false, &format!("\n{RULE}\n"));
    let _ = writeln!(out, "Python:    {}", interpreter.display());
    let _ = writeln!(out, "Installer: {}\n", script.display());
}

/// The six menu options, rendered from the dispatch table
pub fn show_menu(out: &mut impl WriteColor) {
    let _ = writeln!(out, "Select an option:");
    for entry in MENU {
        let _ = writeln!(out, "  {}) {}", entry.key, entry.label);
    }
    let _ = writeln!(out);
    let _ = out.flush();
}

pub fn show_success(out: &mut impl WriteColor) {
    colored(out, Color::Green, true, &format!("\n✓ {SUCCESS_MESSAGE}"));
}

pub fn show_failure(out: &mut impl WriteColor, code: i32) {
    colored(out, Color::Red, true, &format!("\n✗ {FAILURE_MESSAGE}"));
    let _ = writeln!(out, "  Installer exit code: {code}");
}

pub fn show_cancelled(out: &mut impl WriteColor) {
    colored(out, Color::Yellow, false, CANCELLED_MESSAGE);
}

/// `--dry-run` output
pub fn show_preview(out: &mut impl WriteColor, invocation: &Invocation) {
    let _ = writeln!(out, "Would run: {invocation}");
}

pub fn show_error(out: &mut impl WriteColor, message: &str) {
    colored(out, Color::Red, true, &format!("Error: {message}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render(f: impl FnOnce(&mut NoColor<Vec<u8>>)) -> String {
        let mut out = NoColor::new(Vec::new());
        f(&mut out);
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn menu_lists_all_six_options() {
        let text = render(|out| show_menu(out));
        for key in ["1)", "2)", "3)", "4)", "5)", "6)"] {
            assert!(text.contains(key), "missing {key} in {text}");
        }
        assert!(!text.contains("7)"));
    }

    #[test]
    fn status_lines_use_fixed_wording() {
        assert!(render(|out| show_success(out)).contains("Operation completed successfully!"));
        let failed = render(|out| show_failure(out, 2));
        assert!(failed.contains("Operation failed with errors."));
        assert!(failed.contains("exit code: 2"));
        assert_eq!(render(|out| show_cancelled(out)), "Installation cancelled.\n");
    }

    #[test]
    fn banner_shows_resolved_paths() {
        let text = render(|out| {
            show_banner(out, Path::new("/usr/bin/python3"), Path::new("/opt/install_su2.py"))
        });
        assert!(text.contains("/usr/bin/python3"));
        assert!(text.contains("/opt/install_su2.py"));
    }
}
