//! Collision-free destination naming
//!
//! Picks a filename that does not exist in the destination directory,
//! appending a bracketed numeric suffix ("card (1).png") or resuming one
//! the filename already carries. The result is only guaranteed unused at
//! the moment of the check; the caller must move the file promptly, and
//! concurrent writers to the same directory can still collide.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Matches a filename base that already carries a bracketed index.
static INDEXED_BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \((\d+)\)$").expect("indexed-base regex"));

/// Return `filename` if it is unused in `dir`, otherwise the first unused
/// "<stem> (<n>)<ext>" variant, counting up from the filename's own index
/// when it has one.
pub fn resolve_destination_name(dir: &Path, filename: &str) -> String {
    if !dir.join(filename).exists() {
        return filename.to_string();
    }

    let (base, ext) = split_filename(filename);
    let (stem, start) = match parse_indexed_base(&base) {
        Some((stem, index)) => (stem, index),
        None => (base, 1),
    };

    let mut index = start;
    loop {
        let candidate = format!("{} ({}){}", stem, index, ext);
        if !dir.join(&candidate).exists() {
            return candidate;
        }
        index += 1;
    }
}

/// Extract ("card", 3) from "card (3)".
fn parse_indexed_base(base: &str) -> Option<(String, u64)> {
    let caps = INDEXED_BASE.captures(base)?;
    let index: u64 = caps[2].parse().ok()?;
    Some((caps[1].to_string(), index))
}

/// Split into base and extension, keeping the dot with the extension.
fn split_filename(filename: &str) -> (String, String) {
    let path = Path::new(filename);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => (
            stem.to_string_lossy().into_owned(),
            format!(".{}", ext.to_string_lossy()),
        ),
        _ => (filename.to_string(), String::new()),
    }
}
