use std::path::Path;

use anyhow::Result;

use mithila_core::pipeline::report_fonts;
use mithila_font_report::write_reports;

/// Regenerate the HTML review pages next to the fonts.
pub fn report(dist_dir: &Path) -> Result<()> {
    let written = write_reports(dist_dir, &report_fonts())?;
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
