//! Command-line interface definitions.
//!
//! Two positional paths are required. The optional flags adjust how images
//! are matched and what gets reported; without them the tool behaves as a
//! plain `balfour-fix <input> <output>` run.

use crate::fixer::FixOptions;
use crate::scanner::{DEFAULT_EXTENSIONS, ScanOptions, SplitPolicy};
use clap::Parser;
use std::path::PathBuf;

/// Fixes incorrect file extensions for images in balfour csvs.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Roster to correct. Its image directory is resolved relative to this file.
    pub input: PathBuf,

    /// Path the corrected roster is written to. Overwritten if it exists.
    pub output: PathBuf,

    /// Image extensions to index. Repeat to allow several.
    #[arg(long = "ext", value_name = "EXT", default_values = DEFAULT_EXTENSIONS)]
    pub extensions: Vec<String>,

    /// Where filenames and roster references are split into name and extension.
    #[arg(long, value_enum, default_value_t = SplitPolicy::FirstDot)]
    pub split: SplitPolicy,

    /// Glob patterns for image directory entries to skip (e.g. "thumbs", "*.bak.png").
    #[arg(short, long, value_parser = parse_glob)]
    pub exclude: Vec<glob::Pattern>,

    /// Copy row 1 to the output unchanged instead of matching its image.
    #[arg(long)]
    pub keep_schema_row: bool,

    /// Walk the image directory in file-name order so conflicts resolve the same way everywhere.
    #[arg(long)]
    pub sorted: bool,

    /// Report what would change without writing the output file.
    #[arg(long)]
    pub dry_run: bool,

    /// Ask before writing the output file.
    #[arg(short, long)]
    pub interactive: bool,

    /// Emit a JSON report instead of the summary lines.
    #[arg(long)]
    pub json: bool,

    /// Print conflicts and dropped rows to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            split: self.split,
            exclude: self.exclude.clone(),
            sorted: self.sorted,
        }
    }

    pub fn fix_options(&self) -> FixOptions {
        FixOptions {
            split: self.split,
            keep_schema_row: self.keep_schema_row,
        }
    }
}

/// Prints the short usage shown when the positional arguments are wrong.
pub fn print_usage(program: &str) {
    println!("Fixes incorrect file extensions for images in balfour csvs");
    println!("Usage:\n{} inputfile outputfile", program);
}

fn parse_glob(s: &str) -> Result<glob::Pattern, String> {
    glob::Pattern::new(s).map_err(|e| format!("Invalid exclude pattern '{}': {}", s, e))
}
