//! Canonical dispatch table for the installer menu
//!
//! This module defines the authoritative mapping from menu key to the flags
//! passed to the installer script. When adding or changing an option, update
//! ONLY the `MENU` array below.

/// One selectable installer operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Binaries,
    Conda,
    Source,
    Validate,
    Info,
    Uninstall,
}

/// A row of the dispatch table
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub key: &'static str,
    pub choice: MenuChoice,
    pub label: &'static str,
    pub flags: &'static [&'static str],
}

/// Menu rows in display order
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        key: "1",
        choice: MenuChoice::Binaries,
        label: "Install SU2 using pre-compiled binaries (recommended)",
        flags: &["--mode", "binaries"],
    },
    MenuEntry {
        key: "2",
        choice: MenuChoice::Conda,
        label: "Install SU2 using conda",
        flags: &["--mode", "conda"],
    },
    MenuEntry {
        key: "3",
        choice: MenuChoice::Source,
        label: "Build SU2 from source (advanced)",
        flags: &["--mode", "source"],
    },
    MenuEntry {
        key: "4",
        choice: MenuChoice::Validate,
        label: "Validate an existing installation",
        flags: &["--validate"],
    },
    MenuEntry {
        key: "5",
        choice: MenuChoice::Info,
        label: "Show system information",
        flags: &["--info"],
    },
    MenuEntry {
        key: "6",
        choice: MenuChoice::Uninstall,
        label: "Uninstall SU2 and remove environment variables",
        flags: &["--uninstall", "--remove-env"],
    },
];

impl MenuChoice {
    /// Match a line of user input against the menu keys.
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim();
        MENU.iter().find(|e| e.key == key).map(|e| e.choice)
    }

    fn entry(self) -> &'static MenuEntry {
        // MENU rows follow variant declaration order
        &MENU[self as usize]
    }

    /// Flags passed to the installer script for this choice
    pub fn flags(self) -> &'static [&'static str] {
        self.entry().flags
    }

    /// Source builds are long and need an explicit yes from the user
    pub fn requires_confirmation(self) -> bool {
        matches!(self, MenuChoice::Source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MenuChoice; 6] = [
        MenuChoice::Binaries,
        MenuChoice::Conda,
        MenuChoice::Source,
        MenuChoice::Validate,
        MenuChoice::Info,
        MenuChoice::Uninstall,
    ];

    #[test]
    fn every_choice_has_one_row() {
        assert_eq!(MENU.len(), ALL.len());
        for choice in ALL {
            assert_eq!(MENU.iter().filter(|e| e.choice == choice).count(), 1);
        }
    }

    #[test]
    fn rows_follow_variant_order() {
        for (index, entry) in MENU.iter().enumerate() {
            assert_eq!(entry.choice as usize, index);
        }
    }

    #[test]
    fn keys_are_one_through_six_in_order() {
        let keys: Vec<_> = MENU.iter().map(|e| e.key).collect();
        assert_eq!(keys, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn flags_match_installer_contract() {
        assert_eq!(MenuChoice::Binaries.flags(), ["--mode", "binaries"]);
        assert_eq!(MenuChoice::Conda.flags(), ["--mode", "conda"]);
        assert_eq!(MenuChoice::Source.flags(), ["--mode", "source"]);
        assert_eq!(MenuChoice::Validate.flags(), ["--validate"]);
        assert_eq!(MenuChoice::Info.flags(), ["--info"]);
        assert_eq!(MenuChoice::Uninstall.flags(), ["--uninstall", "--remove-env"]);
    }

    #[test]
    fn parse_accepts_keys_with_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Binaries));
        assert_eq!(MenuChoice::parse(" 4\n"), Some(MenuChoice::Validate));
        assert_eq!(MenuChoice::parse("6\r\n"), Some(MenuChoice::Uninstall));
    }

    #[test]
    fn parse_rejects_anything_else() {
        for input in ["", "0", "7", "12", "a", "1a", "one", "-1"] {
            assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
        }
    }

    #[test]
    fn only_source_needs_confirmation() {
        for choice in ALL {
            assert_eq!(
                choice.requires_confirmation(),
                choice == MenuChoice::Source
            );
        }
    }

    #[test]
    fn every_key_parses_to_its_row() {
        for entry in MENU {
            assert_eq!(MenuChoice::parse(entry.key), Some(entry.choice));
            assert!(!entry.label.is_empty());
        }
    }
}
