use std::io::{self, Write};

use colored::Colorize as _;

use crate::data::{Label, Project, SkipReason};

pub fn print_processing(out: &mut impl Write, project: &Project) -> io::Result<()> {
    writeln!(out, "Processing project \"{} [{}]\" ..", project.name, project.id)
}

pub fn print_skip(out: &mut impl Write, label: &Label, reason: SkipReason) -> io::Result<()> {
    writeln!(out, "{} {} {}", "[SKIP]".yellow(), label.name, reason.describe())
}

/// Start of a deletion line, finished by [`print_deleted`].
///
/// Flushed so the prefix shows up before the request blocks.
pub fn print_deleting(out: &mut impl Write, label: &Label) -> io::Result<()> {
    write!(out, "deleting label \"{} [{}]\" ..", label.name, label.id)?;
    out.flush()
}

pub fn print_deleted(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, " {}", "done".green())
}

pub fn print_would_delete(out: &mut impl Write, label: &Label) -> io::Result<()> {
    writeln!(out, "would delete label \"{} [{}]\"", label.name, label.id)
}

/// One `[ERROR]` line per message, then a blank line.
pub fn print_errors(out: &mut impl Write, messages: &[String]) -> io::Result<()> {
    for message in messages {
        let message = if message.trim().is_empty() {
            "Unknown."
        } else {
            message.as_str()
        };
        writeln!(out, "{} {message} ", "[ERROR]".red().bold())?;
    }
    writeln!(out)
}
