//! Coverage validation step and console reporting.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use log::error;
use mithila_font_validator::{CoverageReport, validate_file};
use mithila_glyph_shapes::DEVANAGARI_SETS;

/// Print one font's report in the console format the validator is known by.
pub fn print_report(path: &Path, report: &CoverageReport) {
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    println!("\nValidating: {file_name}");
    println!("{}", "-".repeat(50));

    let summary = &report.summary;
    if let Some(family) = &summary.family {
        println!("  Family:   {family}");
    }
    if let Some(full_name) = &summary.full_name {
        println!("  Name:     {full_name}");
    }
    if let Some(version) = &summary.version {
        println!("  Version:  {version}");
    }
    println!("  Em size:  {}", summary.units_per_em);
    println!("  Ascent:   {}", summary.ascent);
    println!("  Descent:  {}", summary.descent);
    println!("  Glyphs:   {}", summary.glyph_count);
    if let Some(size) = report.file_size {
        println!("  Size:     {size} bytes ({:.1} KB)", size as f64 / 1024.0);
    }

    println!("\n  Character Coverage:");
    for set in &report.sets {
        let mark = if set.is_complete() { '✓' } else { '✗' };
        println!("    {mark} {}: {}", set.name, set.ratio());
        for cp in &set.missing {
            println!("      missing U+{cp:04X}");
        }
    }
    println!("  Overall: {}", report.overall_ratio());

    println!("\n  Key Characters:");
    for key in &report.key_characters {
        let mark = if key.present { '✓' } else { '✗' };
        println!("    {mark} U+{:04X} {}", key.code_point, key.name);
    }
}

/// Validate each path in turn, printing reports as they come.
///
/// A missing or unreadable file is reported and the remaining fonts are
/// still validated; any failure or incomplete coverage makes the whole run
/// fail.
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        bail!("no fonts to validate");
    }

    let mut failures = 0;
    for path in paths {
        match validate_file(path, DEVANAGARI_SETS) {
            Ok(report) => {
                print_report(path, &report);
                if !report.is_complete() {
                    error!("{}: incomplete coverage", path.display());
                    failures += 1;
                }
            }
            Err(e) => {
                error!("{}: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("validation failed for {failures} of {} fonts", paths.len());
    }
    println!("\nValidated {} fonts", paths.len());
    Ok(())
}
