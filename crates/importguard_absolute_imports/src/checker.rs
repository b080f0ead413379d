use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::{env, fs, path::Path};

use importguard_core::{collect_from_roots, display_path, relative_to};

use crate::{
    config::Config,
    pattern::AbsoluteImportPattern,
    types::{ScanResult, Violation},
};

/// Scan the configured roots, reporting paths relative to the current directory.
pub fn scan(cfg: &Config) -> Result<ScanResult> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    scan_relative_to(cfg, &cwd)
}

/// Scan the configured roots, reporting paths relative to `base`.
///
/// Relative roots are resolved against `base`. Any file that cannot be read,
/// or that lies outside `base`, aborts the scan.
pub fn scan_relative_to(cfg: &Config, base: &Path) -> Result<ScanResult> {
    info!("Starting absolute import check for library: {}", cfg.library_name);
    let pattern = AbsoluteImportPattern::new(&cfg.library_name)?;

    let roots: Vec<_> = cfg.roots.iter().map(|r| base.join(r)).collect();
    debug!("Scanning {} roots: {:?}", roots.len(), roots);

    let files = collect_from_roots(&roots)?;
    info!("Found {} source files", files.len());

    let mut violations = Vec::new();
    for file in &files {
        let rel_path = relative_to(file, base)?;
        let display = display_path(&rel_path);
        trace!("Scanning file: {}", display);

        let found = scan_file(file, &display, &pattern)?;
        if !found.is_empty() {
            debug!("{} absolute imports in {}", found.len(), display);
        }
        violations.extend(found);
    }

    info!("Absolute import check complete. Found {} violations", violations.len());
    Ok(ScanResult { violations, files_analyzed: files.len() })
}

fn scan_file(
    path: &Path,
    display: &str,
    pattern: &AbsoluteImportPattern,
) -> Result<Vec<Violation>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let violations = source_lines(&content)
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(idx, line)| Violation {
            file_path: display.to_string(),
            line_number: idx + 1,
            line_text: line.trim().to_string(),
        })
        .collect();
    Ok(violations)
}

/// Split on `\n`, `\r\n` and a lone `\r`, the line endings Python source may use.
fn source_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &rest[..idx];
                let sep = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + sep..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
