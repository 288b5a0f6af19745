//! Terminal decorations used by the listing and detail output.

use crossterm::style::{Stylize, style};

/// Marker for accepted problems.
pub const APPROVED: &str = "✔";

pub fn green(s: &str) -> String {
    style(s).green().to_string()
}

pub fn yellow(s: &str) -> String {
    style(s).yellow().to_string()
}

pub fn red(s: &str) -> String {
    style(s).red().to_string()
}

pub fn gray(s: &str) -> String {
    style(s).dark_grey().to_string()
}
