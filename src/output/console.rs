//! Operator console lines
//!
//! These are the `[INFO]` / `[ERROR]` lines the operator reads while a run
//! progresses. Diagnostic logging goes through `tracing` instead.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes one `[INFO]` line to `out`
pub fn write_info<W: Write + ?Sized>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{} {}", "[INFO]".green(), message)
}

/// Writes one `[ERROR]` line to `out`
pub fn write_error<W: Write + ?Sized>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{} {}", "[ERROR]".red(), message)
}

/// Prints an `[INFO]` line to stdout
pub fn info(message: impl Display) {
    // A closed stdout leaves nobody to tell
    let _ = write_info(&mut io::stdout().lock(), message);
}

/// Prints an `[ERROR]` line to stderr
pub fn error(message: impl Display) {
    let _ = write_error(&mut io::stderr().lock(), message);
}
