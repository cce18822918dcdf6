use std::path::Path;

use anyhow::Result;

use mithila_core::io::glob_fonts;
use mithila_font_validator::validate_file;
use mithila_glyph_shapes::{DEVANAGARI_SETS, KEY_CHARACTERS};

/// Quick per-file summary: names, size, and key-character presence.
///
/// Purely informational; unreadable files are reported but do not fail the
/// run.
pub fn check(dist_dir: &Path) -> Result<()> {
    println!("Checking fonts in {}", dist_dir.display());
    println!("{}", "=".repeat(40));

    let fonts = glob_fonts(dist_dir, "*.ttf")?;
    if fonts.is_empty() {
        println!("No fonts found");
        return Ok(());
    }

    for path in &fonts {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();
        match validate_file(path, DEVANAGARI_SETS) {
            Ok(report) => {
                let present =
                    report.key_characters.iter().filter(|k| k.present).count();
                println!("\n✓ {file_name}");
                if let Some(full_name) = &report.summary.full_name {
                    println!("   Name:   {full_name}");
                }
                if let Some(family) = &report.summary.family {
                    println!("   Family: {family}");
                }
                if let Some(size) = report.file_size {
                    println!("   Size:   {size} bytes");
                }
                println!("   Key chars: {present}/{} present", KEY_CHARACTERS.len());
            }
            Err(e) => println!("\n✗ {file_name}: {e}"),
        }
    }

    Ok(())
}
