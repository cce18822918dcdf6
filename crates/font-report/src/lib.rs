//! Static HTML review pages for the Mithila prototype fonts.
//!
//! Two documents are produced next to the generated TTFs so their relative
//! `@font-face` URLs resolve when opened from disk: an interactive tester
//! and a static results page.

mod pages;
pub mod samples;

use std::{
    fs::{create_dir_all, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;

pub use pages::{ReportFonts, results_page, tester_page};
pub use samples::{GREETING, SAMPLES, TextSample};

/// File name of the interactive tester page.
pub const TESTER_FILENAME: &str = "mithila-tester.html";
/// File name of the static results page.
pub const RESULTS_FILENAME: &str = "mithila-test-results.html";

/// Write both review pages into `dir`, returning the paths written.
pub fn write_reports(dir: &Path, fonts: &ReportFonts) -> Result<Vec<PathBuf>> {
    create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(2);
    for (file_name, html) in
        [(TESTER_FILENAME, tester_page(fonts)), (RESULTS_FILENAME, results_page(fonts))]
    {
        let path = dir.join(file_name);
        write(&path, html)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        info!("{}: wrote review page for '{}'", path.display(), fonts.family);
        written.push(path);
    }

    Ok(written)
}
