//! Suffix-filtered file discovery.
//!
//! Walks the configured root recursively and keeps every file whose name ends
//! in one of the configured suffixes. Symlinks to files are kept, symlinked
//! directories are not entered. Entries that cannot be read are skipped with a
//! warning rather than aborting the run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::config::DiscoveryConfig;

/// Discover candidate source files under `config.root`.
///
/// The result is sorted by path. A missing root yields an empty list.
pub fn discover_files(config: &DiscoveryConfig) -> Vec<PathBuf> {
    discover_under(&config.root, &config.suffixes)
}

/// Discover files under an explicit root with the given suffixes.
pub fn discover_under(root: &Path, suffixes: &[String]) -> Vec<PathBuf> {
    if !root.exists() {
        warn!("Root directory '{}' does not exist", root.display());
        return Vec::new();
    }

    let mut collected = Vec::new();
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker {
        let dir_entry = match entry {
            Ok(dir_entry) => dir_entry,
            Err(err) => {
                warn!("Failed to walk directory: {err}");
                continue;
            }
        };

        // Symlinked directories are not descended into, but a symlink to a
        // file counts as that file.
        let is_file = dir_entry.file_type().is_file()
            || (dir_entry.path_is_symlink() && dir_entry.path().is_file());
        if !is_file {
            continue;
        }

        if has_matching_suffix(dir_entry.path(), suffixes) {
            debug!("Discovered {}", dir_entry.path().display());
            collected.push(dir_entry.into_path());
        }
    }

    collected.sort();
    info!(
        "File discovery completed: {} files under '{}'",
        collected.len(),
        root.display()
    );
    collected
}

/// True if the file name ends with any of `suffixes` (case-sensitive).
pub fn has_matching_suffix(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
