//! Sort command - classify and route card files
//!
//! Walks a target directory for `.png` files, classifies each one by its
//! embedded vendor markers, and moves it into
//! `<output>/<product>/<category>/` under a collision-free name. Files
//! without a recognized marker are left where they are. Per-file failures
//! are reported and counted but never abort the batch.

use crate::cli::error::HelpfulError;
use crate::cli::output::print_table;
use cardsort::sorter::{resolve_destination_name, Classifier, Registry};
use serde::Serialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Arguments for the sort command
#[derive(Debug)]
pub struct SortArgs {
    pub target_dir: PathBuf,
    pub output_dir: PathBuf,
    pub recurse: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// One routed file
#[derive(Debug, Clone, Serialize)]
pub struct RoutedFile {
    /// Where the file was found
    pub source: PathBuf,
    /// Destination relative to the output root
    pub dest: PathBuf,
}

/// Complete sort result
#[derive(Debug, Serialize)]
pub struct SortReport {
    pub routed: Vec<RoutedFile>,
    pub unmatched: usize,
    pub errors: usize,
    pub dry_run: bool,
}

/// Execute the sort command
pub fn run(args: SortArgs) -> anyhow::Result<()> {
    if !args.target_dir.exists() {
        return Err(HelpfulError::path_not_found(&args.target_dir).into());
    }
    if !args.target_dir.is_dir() {
        return Err(HelpfulError::not_a_directory(&args.target_dir).into());
    }

    // A bad marker table is fatal before any file is touched.
    let registry = Registry::builtin()?;
    let classifier = Classifier::new(&registry)?;

    let output_root = absolute(&args.output_dir)?;

    if args.dry_run && !args.json {
        println!("Dry run, no files will be moved");
    }

    let mut report = SortReport {
        routed: Vec::new(),
        unmatched: 0,
        errors: 0,
        dry_run: args.dry_run,
    };

    let max_depth = if args.recurse { usize::MAX } else { 1 };
    let walker = WalkDir::new(&args.target_dir)
        .max_depth(max_depth)
        .into_iter()
        // The output tree may be nested inside the target tree; never
        // descend into it or already-sorted cards would be re-sorted.
        .filter_entry(|entry| {
            absolute(entry.path())
                .map(|path| !path.starts_with(&output_root))
                .unwrap_or(true)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                report.errors += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_png(path) {
            continue;
        }

        match sort_one(&classifier, path, &args.output_dir, args.dry_run) {
            Ok(Some(routed)) => {
                if !args.json {
                    println!(
                        "'{}' -> '{}'",
                        entry.file_name().to_string_lossy(),
                        routed.dest.display()
                    );
                }
                report.routed.push(routed);
            }
            Ok(None) => {
                debug!("no marker match: {}", path.display());
                report.unmatched += 1;
            }
            Err(err) => {
                warn!("failed to sort '{}': {}", path.display(), err);
                report.errors += 1;
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(
            &["Result", "Count"],
            vec![
                vec!["Routed".to_string(), report.routed.len().to_string()],
                vec!["Unmatched".to_string(), report.unmatched.to_string()],
                vec!["Errors".to_string(), report.errors.to_string()],
            ],
        );
    }

    Ok(())
}

/// Classify one file and move it into place, or report that no marker
/// matched. In dry-run mode the destination is computed but nothing on
/// disk changes.
fn sort_one(
    classifier: &Classifier,
    path: &Path,
    output_dir: &Path,
    dry_run: bool,
) -> anyhow::Result<Option<RoutedFile>> {
    let data = fs::read(path)?;
    let Some(classification) = classifier.classify(&data) else {
        return Ok(None);
    };

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("path has no file name: {}", path.display()))?;

    let dest_dir = output_dir.join(classification.subpath());
    if !dry_run {
        fs::create_dir_all(&dest_dir)?;
    }

    // The resolved name is only guaranteed unused at this moment; a
    // concurrent writer to the same directory can still race the move.
    let dest_name = resolve_destination_name(&dest_dir, &filename);
    if !dry_run {
        move_file(path, &dest_dir.join(&dest_name))?;
    }

    Ok(Some(RoutedFile {
        source: path.to_path_buf(),
        dest: classification.subpath().join(dest_name),
    }))
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Move a file. Renames fail across filesystems, so fall back to
/// copy-then-remove when that happens.
fn move_file(source: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(source, dest)?;
            fs::remove_file(source)
        }
    }
}

/// Absolute, lexically normalized form of a path. No symlink resolution,
/// so it also works for paths that do not exist yet.
fn absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
