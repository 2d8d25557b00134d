//! Run summary and diagnostics output.

use crate::fixer::{FixResult, IMAGE_COLUMN};
use crate::scanner::ImageIndex;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Counts printed after every run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Rows in the input roster, header included.
    pub peeps: usize,
    /// Distinct image base-names found on disk.
    pub pics: usize,
    pub conflicts: usize,
    pub missing: usize,
}

impl Summary {
    pub fn new(roster_len: usize, index: &ImageIndex, result: &FixResult) -> Self {
        Self {
            peeps: roster_len,
            pics: index.len(),
            conflicts: index.conflicts.len(),
            missing: result.missing.len(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\t peeps", self.peeps)?;
        writeln!(f, "{}\t pics", self.pics)?;
        writeln!(f, "{}\t conflicts", self.conflicts)?;
        write!(f, "{}\t missing", self.missing)
    }
}

/// A dropped roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingRow {
    pub row: usize,
    pub reference: Option<String>,
}

/// Everything a `--json` run emits.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub summary: Summary,
    pub conflicts: &'a BTreeMap<String, Vec<String>>,
    pub missing: Vec<MissingRow>,
    pub written: bool,
}

impl<'a> Report<'a> {
    pub fn new(
        roster: &[Vec<String>],
        index: &'a ImageIndex,
        result: &FixResult,
        written: bool,
    ) -> Self {
        Self {
            summary: Summary::new(roster.len(), index, result),
            conflicts: &index.conflicts,
            missing: missing_rows(roster, result),
            written,
        }
    }
}

/// Pairs each missing index with the image reference it carried.
pub fn missing_rows(roster: &[Vec<String>], result: &FixResult) -> Vec<MissingRow> {
    result
        .missing
        .iter()
        .map(|&row| MissingRow {
            row,
            reference: roster
                .get(row)
                .and_then(|cells| cells.get(IMAGE_COLUMN))
                .cloned(),
        })
        .collect()
}

pub fn print_summary(summary: &Summary) {
    println!("{}", summary);
}

/// Prints skipped files, conflicts and dropped rows to stderr.
pub fn print_details(roster: &[Vec<String>], index: &ImageIndex, result: &FixResult) {
    for path in &index.skipped {
        eprintln!(
            "{} skipped {}: file name is not valid UTF-8",
            "warn:".yellow().bold(),
            path.display()
        );
    }

    for (name, files) in &index.conflicts {
        eprintln!(
            "{} {} has {} files: {}",
            "warn:".yellow().bold(),
            name.red(),
            files.len(),
            files.join(", ").dimmed()
        );
    }

    for missing in missing_rows(roster, result) {
        eprintln!(
            "{} row {} dropped: no image for {}",
            "warn:".yellow().bold(),
            missing.row,
            missing.reference.as_deref().unwrap_or("?").red()
        );
    }
}
