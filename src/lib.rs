//! balfour-fix library for correcting image references in balfour rosters.
//!
//! A balfour roster is a tab-separated file whose third column names an image
//! for each row, often with the wrong extension. The workflow has three phases:
//!
//! 1. **Scanning**: Walk the image directory and index files by base-name
//! 2. **Fixing**: Rewrite each row's image reference to the indexed filename
//! 3. **Writing**: Persist the corrected roster
//!
//! # Example
//!
//! ```no_run
//! use balfour_fix::{fixer, roster, scanner};
//! use std::path::Path;
//!
//! let input = Path::new("class/roster.tsv");
//! let peeps = roster::read(input).unwrap();
//! let dir = roster::image_dir(&peeps, input).unwrap();
//!
//! let index = scanner::scan_images(&dir, &scanner::ScanOptions::default()).unwrap();
//! let result = fixer::fix_extensions(&peeps, &index, &fixer::FixOptions::default()).unwrap();
//!
//! println!("{} rows had no image", result.missing.len());
//! roster::write(&result.fixed, Path::new("class/fixed.tsv")).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod fixer;
pub mod report;
pub mod roster;
pub mod scanner;

// Re-export commonly used types at crate root
pub use error::FixError;
pub use fixer::FixResult;
pub use scanner::ImageIndex;
