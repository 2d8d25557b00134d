//! Balfour roster reading and writing.
//!
//! A roster is tab-separated with `"` as the quote character. Row 0 is an
//! opaque header and row 1 carries the image directory in its second cell.
//! Rows may differ in width; nothing here validates the schema.

use crate::error::FixError;
use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Rows of string cells, in file order.
pub type Roster = Vec<Vec<String>>;

const DELIMITER: u8 = b'\t';
const QUOTE: u8 = b'"';

/// Reads a roster from `path`.
pub fn read(path: &Path) -> Result<Roster> {
    let file =
        File::open(path).with_context(|| format!("Failed to open roster {}", path.display()))?;
    read_from(file).with_context(|| format!("Failed to parse roster {}", path.display()))
}

/// Reads a roster from any byte source.
pub fn read_from<R: std::io::Read>(source: R) -> Result<Roster> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Bad record at row {}", idx))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Writes `roster` to `path`, replacing any existing file.
///
/// Fields that parse as numbers are written bare; everything else is quoted.
pub fn write(roster: &[Vec<String>], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output {}", path.display()))?;
    write_to(roster, file).with_context(|| format!("Failed to write output {}", path.display()))
}

/// Writes `roster` to any byte sink.
pub fn write_to<W: std::io::Write>(roster: &[Vec<String>], sink: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .quote_style(QuoteStyle::NonNumeric)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_writer(sink);

    for row in roster {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Resolves the image directory named in row 1, cell 1 against the roster's own directory.
pub fn image_dir(roster: &[Vec<String>], roster_path: &Path) -> Result<PathBuf, FixError> {
    let relative = roster
        .get(1)
        .and_then(|row| row.get(1))
        .ok_or(FixError::MissingImageDir)?;
    let base = roster_path.parent().unwrap_or_else(|| Path::new(""));
    Ok(base.join(relative))
}
