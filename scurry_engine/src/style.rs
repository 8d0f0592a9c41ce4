//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn area_style(&self) -> ColoredString;
    fn stat_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn hazard_style(&self) -> ColoredString;
    fn relief_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn banner_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn area_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn stat_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn hazard_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn relief_style(&self) -> ColoredString {
        self.dimmed().truecolor(150, 230, 130)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(223, 177, 10)
    }
    fn banner_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn victory_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(200, 50, 50)
    }
}

impl GameStyle for String {
    fn area_style(&self) -> ColoredString {
        self.as_str().area_style()
    }
    fn stat_style(&self) -> ColoredString {
        self.as_str().stat_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn hazard_style(&self) -> ColoredString {
        self.as_str().hazard_style()
    }
    fn relief_style(&self) -> ColoredString {
        self.as_str().relief_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn banner_style(&self) -> ColoredString {
        self.as_str().banner_style()
    }
    fn victory_style(&self) -> ColoredString {
        self.as_str().victory_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
}
