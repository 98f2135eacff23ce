//! Result and error reporting
//!
//! Stdout carries only the result lines so scripts can take the last line
//! as the new version. Everything else goes to stderr.

use crate::cli::ColorChoice;
use std::fmt;
use std::io::{IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// What a successful run changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: String,
    pub new_version: String,
    pub lockfile_changed: bool,
}

impl BumpOutcome {
    /// Formats the stdout lines for this outcome
    ///
    /// The final line is always the bare new version.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.lockfile_changed {
            out.push_str(&format!("Lockfile updated to {}\n", self.new_version));
        }
        out.push_str(&self.new_version);
        out.push('\n');
        out
    }
}

/// Prints `Error: <message>` to stderr, coloring the prefix when enabled
pub fn print_error(color: ColorChoice, message: &dyn fmt::Display) {
    let mut stderr = StandardStream::stderr(resolve_color(color, std::io::stderr().is_terminal()));

    // Nothing sensible to do if stderr itself is broken
    let _ = write_error(&mut stderr, message);
}

fn write_error(out: &mut impl WriteColor, message: &dyn fmt::Display) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "Error:")?;
    out.reset()?;
    writeln!(out, " {}", message)
}

fn resolve_color(choice: ColorChoice, is_terminal: bool) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}
