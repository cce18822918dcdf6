use std::path::{Path, PathBuf};

use anyhow::Result;

use mithila_core::{config::FONT_PATTERN, io::glob_fonts, validate_paths};

/// Validate explicit font paths, or every generated font in `dist_dir`
/// when none are given.
pub fn validate(paths: Vec<PathBuf>, dist_dir: &Path) -> Result<()> {
    let paths = if paths.is_empty() { glob_fonts(dist_dir, FONT_PATTERN)? } else { paths };
    validate_paths(&paths)
}
