//! balfour-fix: Fix image filename references in balfour rosters.
//!
//! Reads a tab-separated roster, indexes the images in the directory named by
//! the roster, rewrites each row's image reference to the file actually on
//! disk, and writes the corrected roster.

use anyhow::Result;
use balfour_fix::cli::{Args, print_usage};
use balfour_fix::report::{self, Report, Summary};
use balfour_fix::{fixer, roster, scanner};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

fn main() -> Result<()> {
    // Any argument count other than two is a usage error, help and version included.
    let argc = std::env::args_os().count().saturating_sub(1);
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if argc == 2
                && matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.exit()
        }
        Err(err) => {
            let program = std::env::args_os()
                .next()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "balfour-fix".to_string());
            print_usage(&program);
            eprint!("{}", err);
            std::process::exit(1);
        }
    };

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let peeps = roster::read(&args.input)?;
    let image_dir = roster::image_dir(&peeps, &args.input)?;
    if args.verbose {
        eprintln!(
            "{} Scanning {} for images",
            "info:".blue().bold(),
            image_dir.display()
        );
    }

    let index = scanner::scan_images(&image_dir, &args.scan_options())?;
    if args.verbose {
        eprintln!(
            "{} Visited {} files, indexed {} images",
            "info:".blue().bold(),
            index.files_seen,
            index.len()
        );
    }

    let result = fixer::fix_extensions(&peeps, &index, &args.fix_options())?;

    if !args.json {
        report::print_summary(&Summary::new(peeps.len(), &index, &result));
    }
    if args.verbose {
        report::print_details(&peeps, &index, &result);
    }

    let written = if args.dry_run {
        eprintln!(
            "{} Dry run, {} not written",
            "hint:".cyan().bold(),
            args.output.display()
        );
        false
    } else if args.interactive && !confirm_write(&args.output, result.fixed.len())? {
        eprintln!("{} Skipped {}", "info:".blue().bold(), args.output.display());
        false
    } else {
        roster::write(&result.fixed, &args.output)?;
        true
    };

    if args.json {
        let report = Report::new(&peeps, &index, &result, written);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn confirm_write(output: &Path, rows: usize) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("Write {} rows to {}?", rows, output.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
