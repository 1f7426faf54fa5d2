//! Output formatting for the CLI.
//!
//! This module provides the human-readable table and JSON formatters for
//! stale-entry reports.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use codeowners_prune_core::StaleEntry;

/// A stale entry in JSON output form.
#[derive(Debug, Serialize)]
pub struct JsonStaleEntry<'a> {
    /// 1-based line number in the manifest.
    pub line: usize,
    /// The pattern exactly as written.
    pub pattern: &'a str,
    /// The owner text, null when none was specified.
    pub owner: Option<&'a str>,
    /// The verbatim manifest line.
    pub text: &'a str,
}

impl<'a> From<&'a StaleEntry> for JsonStaleEntry<'a> {
    fn from(entry: &'a StaleEntry) -> Self {
        Self {
            line: entry.line,
            pattern: &entry.pattern,
            owner: entry.owner.as_deref(),
            text: &entry.text,
        }
    }
}

/// Writes the stale entries as a JSON array.
pub fn write_json<W: Write>(writer: &mut W, stale: &[StaleEntry]) -> std::io::Result<()> {
    let entries: Vec<JsonStaleEntry<'_>> = stale.iter().map(JsonStaleEntry::from).collect();
    let json = serde_json::to_string_pretty(&entries).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes the stale-entry report: a count plus a table, or a success
    /// message when nothing is stale.
    pub fn write_report(&mut self, stale: &[StaleEntry]) -> std::io::Result<()> {
        if stale.is_empty() {
            return self.write_all_exist();
        }

        let count = format!(
            "{} files/patterns in CODEOWNERS do not exist (anymore).",
            stale.len()
        );
        if self.use_colors {
            writeln!(self.writer, "{}", count.yellow().bold())?;
        } else {
            writeln!(self.writer, "{}", count)?;
        }

        self.write_table(stale)
    }

    /// Writes the success message for a manifest with no stale entries.
    pub fn write_all_exist(&mut self) -> std::io::Result<()> {
        let message = "All files/patterns listed in CODEOWNERS exist.";
        if self.use_colors {
            writeln!(self.writer, "{}", message.green().bold())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Writes the no-op message for patch mode on a clean manifest.
    pub fn write_nothing_to_patch(&mut self) -> std::io::Result<()> {
        let message = "Nothing to patch: all files/patterns listed in CODEOWNERS exist.";
        if self.use_colors {
            writeln!(self.writer, "{}", message.green().bold())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Writes the confirmation after a patch file has been written.
    pub fn write_patch_written(&mut self, count: usize, path: &Path) -> std::io::Result<()> {
        let message = format!(
            "Wrote patch removing {} stale line(s) to {}",
            count,
            path.display()
        );
        if self.use_colors {
            writeln!(self.writer, "{}", message.green().bold())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }

    /// Writes the stale entries as an aligned table.
    fn write_table(&mut self, stale: &[StaleEntry]) -> std::io::Result<()> {
        const HEADERS: [&str; 4] = ["Line", "File/Pattern", "Owner", "Entry"];

        let rows: Vec<[String; 4]> = stale
            .iter()
            .map(|entry| {
                [
                    entry.line.to_string(),
                    entry.pattern.clone(),
                    entry.display_owner().to_string(),
                    entry.text.clone(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        let header = header.join("  ");
        if self.use_colors {
            writeln!(self.writer, "{}", header.bold())?;
        } else {
            writeln!(self.writer, "{}", header)?;
        }

        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        writeln!(self.writer, "{}", rule.join("  "))?;

        // Pad before coloring so the escape codes don't skew the alignment
        for row in &rows {
            let line = pad(&row[0], widths[0]);
            let pattern = pad(&row[1], widths[1]);
            let owner = pad(&row[2], widths[2]);
            if self.use_colors {
                writeln!(
                    self.writer,
                    "{}  {}  {}  {}",
                    line,
                    pattern.cyan(),
                    owner.magenta(),
                    row[3]
                )?;
            } else {
                writeln!(self.writer, "{}  {}  {}  {}", line, pattern, owner, row[3])?;
            }
        }

        Ok(())
    }
}

/// Pads a cell to the column width, left-aligned.
fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell)
}
