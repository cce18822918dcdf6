//! Font generation steps.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use rayon::prelude::*;

use crate::{
    families::FontFamily,
    io::{check_results_with_paths, write_font},
    styles::{STYLES, Style},
};

use super::PipelineContext;

/// Build every style of one family into the dist directory.
pub fn build_family(ctx: &PipelineContext, family: FontFamily) -> Result<()> {
    println!("  Building {} ({} styles)...", family.family_name(), STYLES.len());

    let results: Vec<(PathBuf, Result<()>)> = STYLES
        .par_iter()
        .map(|style| {
            let path = ctx.dist_dir.join(family.file_name(style));
            let result = build_style(ctx, family, style, &path);
            (path, result)
        })
        .collect();

    check_results_with_paths(&results, "build fonts")
}

fn build_style(
    ctx: &PipelineContext,
    family: FontFamily,
    style: &Style,
    path: &Path,
) -> Result<()> {
    let descriptor = family.descriptor(style, &ctx.version);
    let data = descriptor.compile()?;
    write_font(path, &data)?;
    info!(
        "{}: {} glyphs, {} bytes",
        path.display(),
        descriptor.glyph_count() + 1,
        data.len()
    );
    Ok(())
}
