use anyhow::{Context, Result, bail};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use crate::constants::SOURCE_FILE_SUFFIX;

/// Recursively collects every source file under `root`.
///
/// The walk is complete: hidden entries and ignore files are not honored, so
/// nothing under the root escapes the check. Within each directory, its own
/// files come first in file-name order, then its subdirectories in file-name
/// order, which keeps the result stable between runs.
///
/// Symlinks are not descended into, but a `*.py` symlink is collected like a
/// regular file. A dangling one is kept so reading it fails the scan.
pub fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Walking directory tree from root: {}", root.display());
    if !root.is_dir() {
        bail!("Root path is not a readable directory: {}", root.display());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(files_before_dirs)
        .build();

    for res in walker {
        let dent = res.with_context(|| format!("Failed to walk {}", root.display()))?;
        let p = dent.path();
        if !(p.is_file() || dent.path_is_symlink()) {
            continue;
        }

        if is_source_file(p) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    debug!("Collected {} source files under {}", files.len(), root.display());
    Ok(files)
}

/// Collects source files for each root in order, concatenating the results.
pub fn collect_from_roots<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        files.extend(collect_source_files(root.as_ref())?);
    }
    Ok(files)
}

fn is_real_dir(path: &Path) -> bool {
    path.symlink_metadata().is_ok_and(|m| m.is_dir())
}

fn files_before_dirs(a: &Path, b: &Path) -> Ordering {
    is_real_dir(a).cmp(&is_real_dir(b)).then_with(|| a.file_name().cmp(&b.file_name()))
}

fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(SOURCE_FILE_SUFFIX))
}
