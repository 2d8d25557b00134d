//! Image directory scanner.
//!
//! Recursively walks the image directory and indexes every file with an
//! allowed extension by its base-name. When several files share a base-name
//! the last one walked wins, and every occurrence is recorded as a conflict.

use crate::error::FixError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions indexed when no others are configured.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Where a filename is cut into base-name and extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SplitPolicy {
    /// Split at the first `.`; `a.b.png` has extension `b.png`.
    #[default]
    FirstDot,
    /// Split at the last `.`; `a.b.png` has base-name `a.b` and extension `png`.
    LastDot,
}

/// Splits `name` into `(base, extension)` according to `policy`.
pub fn split_name(name: &str, policy: SplitPolicy) -> Result<(&str, &str), FixError> {
    let parts = match policy {
        SplitPolicy::FirstDot => name.split_once('.'),
        SplitPolicy::LastDot => name.rsplit_once('.'),
    };
    parts.ok_or_else(|| FixError::MalformedName(name.to_string()))
}

/// Settings for a single scan. Built once by the caller and never mutated.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions to index, compared case-sensitively.
    pub extensions: Vec<String>,
    pub split: SplitPolicy,
    /// Entry names matching any of these are skipped; matching directories are pruned.
    pub exclude: Vec<glob::Pattern>,
    /// Visit entries in file-name order instead of directory order.
    pub sorted: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            split: SplitPolicy::default(),
            exclude: Vec::new(),
            sorted: false,
        }
    }
}

/// Base-name index of the images found under a directory.
#[derive(Debug, Default)]
pub struct ImageIndex {
    /// Base-name to the last filename seen with that base-name.
    pub images: HashMap<String, String>,
    /// Base-names seen more than once, with every filename in walk order.
    pub conflicts: BTreeMap<String, Vec<String>>,
    /// Regular files visited, indexed or not.
    pub files_seen: usize,
    /// Files left out because their names are not valid UTF-8.
    pub skipped: Vec<PathBuf>,
}

impl ImageIndex {
    /// Records `file` under `name`, replacing any earlier file with that name.
    pub fn insert(&mut self, name: &str, file: &str) {
        if let Some(previous) = self.images.insert(name.to_string(), file.to_string()) {
            self.conflicts
                .entry(name.to_string())
                .or_insert_with(|| vec![previous])
                .push(file.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.images.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Walks `root` and indexes every regular file whose extension is allowed.
///
/// Every visited filename must contain a `.`, whether or not its extension is
/// allowed; a name without one aborts the scan with
/// [`FixError::MalformedName`]. Dotted filenames that are not valid UTF-8
/// cannot appear in a roster; they are skipped and listed in
/// [`ImageIndex::skipped`]. A `root` that is not a directory is rejected with
/// [`FixError::NotADirectory`].
pub fn scan_images(root: &Path, options: &ScanOptions) -> Result<ImageIndex> {
    let metadata =
        fs::metadata(root).with_context(|| format!("Failed to walk {}", root.display()))?;
    if !metadata.is_dir() {
        return Err(FixError::NotADirectory(root.to_path_buf()).into());
    }

    let mut walker = WalkDir::new(root);
    if options.sorted {
        walker = walker.sort_by_file_name();
    }

    let mut index = ImageIndex::default();

    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, &options.exclude))
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        index.files_seen += 1;
        let Some(file_name) = entry.file_name().to_str() else {
            let raw = entry.file_name();
            if !raw.as_encoded_bytes().contains(&b'.') {
                return Err(FixError::MalformedName(raw.to_string_lossy().into_owned()).into());
            }
            index.skipped.push(entry.path().to_path_buf());
            continue;
        };

        let (name, ext) = split_name(file_name, options.split)?;
        if options.extensions.iter().any(|allowed| allowed == ext) {
            index.insert(name, file_name);
        }
    }

    Ok(index)
}

fn is_excluded(entry: &walkdir::DirEntry, patterns: &[glob::Pattern]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| patterns.iter().any(|p| p.matches(s)))
}
