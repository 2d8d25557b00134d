//! Roster image-reference correction.
//!
//! Rewrites the image column of each data row to the filename actually on
//! disk, matching on base-name only. Rows whose base-name is not in the image
//! index are dropped and reported by their original row index.

use crate::error::FixError;
use crate::roster::Roster;
use crate::scanner::{ImageIndex, SplitPolicy, split_name};

/// Cell holding the `name.ext` image reference in every data row.
pub const IMAGE_COLUMN: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// How roster references are split; should match the scan.
    pub split: SplitPolicy,
    /// Copy row 1 through untouched instead of matching it like a data row.
    pub keep_schema_row: bool,
}

/// Corrected roster plus the indices of rows that had no matching image.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixResult {
    pub fixed: Roster,
    pub missing: Vec<usize>,
}

/// Replaces each data row's image reference with the on-disk filename from `images`.
///
/// Row 0 is copied as-is. Every later row, including row 1 unless
/// `keep_schema_row` is set, is either copied with its image cell rewritten or
/// dropped and its index added to `missing`. The extension in the roster is
/// ignored for matching. An empty roster yields an empty result.
pub fn fix_extensions(
    roster: &[Vec<String>],
    images: &ImageIndex,
    options: &FixOptions,
) -> Result<FixResult, FixError> {
    let mut result = FixResult::default();
    let Some(header) = roster.first() else {
        return Ok(result);
    };
    result.fixed.push(header.clone());

    for (idx, row) in roster.iter().enumerate().skip(1) {
        if idx == 1 && options.keep_schema_row {
            result.fixed.push(row.clone());
            continue;
        }

        let reference = row
            .get(IMAGE_COLUMN)
            .ok_or(FixError::MissingImageColumn(idx))?;
        let (name, _) = split_name(reference, options.split)?;

        match images.get(name) {
            Some(file) => {
                let mut fixed = row.clone();
                fixed[IMAGE_COLUMN] = file.to_string();
                result.fixed.push(fixed);
            }
            None => result.missing.push(idx),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(items: &[&[&str]]) -> Roster {
        items
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn index(files: &[(&str, &str)]) -> ImageIndex {
        let mut index = ImageIndex::default();
        for (name, file) in files {
            index.insert(name, file);
        }
        index
    }

    fn header() -> &'static [&'static str] {
        &["name", "folder", "pic"]
    }

    #[test]
    fn rewrites_mismatched_extension() {
        let roster = rows(&[header(), &["Alice", "pics", "alice.jpeg"]]);
        let images = index(&[("alice", "alice.png"), ("bob", "bob.jpg")]);

        let result = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(
            result.fixed,
            rows(&[header(), &["Alice", "pics", "alice.png"]])
        );
        assert!(result.missing.is_empty());
    }

    #[test]
    fn conflicting_name_uses_last_seen_file() {
        let roster = rows(&[header(), &["Carol", "pics", "carol.anything"]]);
        let images = index(&[("carol", "carol.png"), ("carol", "carol.jpg")]);

        let result = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(result.fixed[1][IMAGE_COLUMN], "carol.jpg");
    }

    #[test]
    fn drops_unmatched_rows_and_records_index() {
        let roster = rows(&[
            header(),
            &["Alice", "pics", "alice.jpg"],
            &["Dave", "pics", "dave.png"],
            &["Bob", "pics", "bob.png"],
        ]);
        let images = index(&[("alice", "alice.png"), ("bob", "bob.jpg")]);

        let result = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(
            result.fixed,
            rows(&[
                header(),
                &["Alice", "pics", "alice.png"],
                &["Bob", "pics", "bob.jpg"],
            ])
        );
        assert_eq!(result.missing, vec![2]);
    }

    #[test]
    fn header_is_never_matched() {
        let roster = rows(&[&["nobody", "x", "no dot here"], &["Alice", "pics", "alice.jpg"]]);
        let images = index(&[("alice", "alice.png")]);

        let result = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(result.fixed[0], roster[0]);
    }

    #[test]
    fn other_cells_are_preserved() {
        let roster = rows(&[
            &["name", "folder", "pic", "grade"],
            &["Alice", "pics", "alice.jpg", "7"],
        ]);
        let images = index(&[("alice", "alice.png")]);

        let result = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(result.fixed[1], vec!["Alice", "pics", "alice.png", "7"]);
    }

    #[test]
    fn schema_row_is_matched_like_data_by_default() {
        let roster = rows(&[header(), &["Dave", "pics", "dave.png"]]);
        let images = index(&[("alice", "alice.png")]);

        let result = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(result.fixed, rows(&[header()]));
        assert_eq!(result.missing, vec![1]);
    }

    #[test]
    fn keep_schema_row_passes_row_one_through() {
        let roster = rows(&[
            header(),
            &["", "pics", "dave.png"],
            &["Alice", "pics", "alice.jpg"],
        ]);
        let images = index(&[("alice", "alice.png")]);
        let options = FixOptions {
            keep_schema_row: true,
            ..FixOptions::default()
        };

        let result = fix_extensions(&roster, &images, &options).unwrap();
        assert_eq!(result.fixed[1], roster[1]);
        assert_eq!(result.fixed[2][IMAGE_COLUMN], "alice.png");
        assert!(result.missing.is_empty());
    }

    #[test]
    fn keep_schema_row_tolerates_short_row_one() {
        let roster = rows(&[header(), &["", "pics"]]);
        let options = FixOptions {
            keep_schema_row: true,
            ..FixOptions::default()
        };

        let result = fix_extensions(&roster, &ImageIndex::default(), &options).unwrap();
        assert_eq!(result.fixed, roster);
    }

    #[test]
    fn reference_without_dot_is_fatal() {
        let roster = rows(&[header(), &["Alice", "pics", "alice"]]);
        let images = index(&[("alice", "alice.png")]);

        let err = fix_extensions(&roster, &images, &FixOptions::default()).unwrap_err();
        assert_eq!(err, FixError::MalformedName("alice".to_string()));
    }

    #[test]
    fn short_data_row_is_fatal() {
        let roster = rows(&[header(), &["Alice", "pics", "alice.jpg"], &["Bob"]]);
        let images = index(&[("alice", "alice.png")]);

        let err = fix_extensions(&roster, &images, &FixOptions::default()).unwrap_err();
        assert_eq!(err, FixError::MissingImageColumn(2));
    }

    #[test]
    fn last_dot_policy_matches_dotted_names() {
        let roster = rows(&[header(), &["Al", "pics", "al.b.jpg"]]);
        let images = index(&[("al.b", "al.b.png")]);

        let first = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        assert_eq!(first.missing, vec![1]);

        let options = FixOptions {
            split: SplitPolicy::LastDot,
            ..FixOptions::default()
        };
        let last = fix_extensions(&roster, &images, &options).unwrap();
        assert_eq!(last.fixed[1][IMAGE_COLUMN], "al.b.png");
    }

    #[test]
    fn empty_roster_yields_empty_result() {
        let result = fix_extensions(&[], &ImageIndex::default(), &FixOptions::default()).unwrap();
        assert_eq!(result, FixResult::default());
    }

    #[test]
    fn fixed_and_missing_partition_data_rows() {
        let images = index(&[("a", "a.png"), ("b", "b.jpg"), ("c", "c.jpeg")]);
        let rosters = [
            rows(&[header()]),
            rows(&[header(), &["", "", "a.jpg"]]),
            rows(&[header(), &["", "", "z.jpg"], &["", "", "b.png"]]),
            rows(&[
                header(),
                &["", "", "x.png"],
                &["", "", "y.png"],
                &["", "", "c.png"],
                &["", "", "a.gif"],
            ]),
        ];

        for roster in &rosters {
            let result = fix_extensions(roster, &images, &FixOptions::default()).unwrap();
            assert_eq!(
                result.fixed.len(),
                1 + (roster.len() - 1 - result.missing.len())
            );
        }
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let roster = rows(&[
            header(),
            &["Alice", "pics", "alice.jpeg"],
            &["Dave", "pics", "dave.png"],
            &["Carol", "pics", "carol.png"],
        ]);
        let images = index(&[("alice", "alice.png"), ("carol", "carol.png"), ("carol", "carol.jpg")]);

        let first = fix_extensions(&roster, &images, &FixOptions::default()).unwrap();
        let second = fix_extensions(&first.fixed, &images, &FixOptions::default()).unwrap();
        assert_eq!(second.fixed, first.fixed);
        assert!(second.missing.is_empty());
    }
}
