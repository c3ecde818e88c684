//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn boot_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn option_style(&self) -> ColoredString;
    fn confirm_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn journal_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn boot_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn section_style(&self) -> ColoredString {
        self.truecolor(75, 80, 75).bold()
    }
    fn option_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn confirm_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn journal_style(&self) -> ColoredString {
        self.italic().truecolor(75, 180, 255)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(150, 230, 30)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn boot_style(&self) -> ColoredString {
        self.as_str().boot_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn option_style(&self) -> ColoredString {
        self.as_str().option_style()
    }
    fn confirm_style(&self) -> ColoredString {
        self.as_str().confirm_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn journal_style(&self) -> ColoredString {
        self.as_str().journal_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}
