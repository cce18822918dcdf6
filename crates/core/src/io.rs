//! File-system helpers for the dist directory.

use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::glob;
use log::error;

/// Write a generated font, creating the dist directory on first use.
pub fn write_font(path: &Path, data: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    write(path, data).with_context(|| format!("Failed to write font: {}", path.display()))
}

/// Generated fonts in `dir` matching `pattern` (e.g. `Mithila*-*.ttf`).
pub fn glob_fonts(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let pattern = dir.join(pattern);
    let pattern = pattern.to_str().context("Invalid dist directory path")?;
    Ok(glob(pattern)
        .with_context(|| format!("Failed to glob pattern: {pattern}"))?
        .filter_map(Result::ok)
        .collect())
}

/// Log every failed font in a batch and bail with a count if any failed.
pub fn check_results_with_paths<T, P: AsRef<Path>>(
    results: &[(P, Result<T>)],
    operation: &str,
) -> Result<()> {
    let mut failed = 0;
    for (path, result) in results {
        if let Err(err) = result {
            error!("{}: {err:#}", path.as_ref().display());
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{operation} failed for {failed} fonts");
    }
    Ok(())
}
