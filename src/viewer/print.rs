// src/viewer/print.rs
use crate::host::Session;
use colored::Colorize;
use std::io::{self, Write};

pub const NOTICE_PREFIX: &str = "pandoc-preview:";

/// Writes each notice of `session` as a single line.
pub fn print_notices<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    for notice in session.notices() {
        writeln!(out, "{} {notice}", NOTICE_PREFIX.yellow().bold())?;
    }
    out.flush()
}

/// Writes every surface of `session` to `out`, one line per buffer line.
/// Used when the output is not a terminal or `--print` was passed.
pub fn print_surfaces<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    for (i, buffer) in session.buffers().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for line in buffer.lines() {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()
}
