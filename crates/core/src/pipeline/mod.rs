//! Build pipeline for the Mithila prototype fonts.

mod build;
mod clean;
mod steps;
mod validate;

pub use build::build_family;
pub use clean::clean;
pub use steps::{BUILD_STEPS, PipelineStep, report_fonts};
pub use validate::{print_report, validate_paths};

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Result;
use mithila_font_builder::FontVersion;

use crate::{
    config::FONT_PATTERN,
    families::FontFamily,
    io::glob_fonts,
    styles::STYLES,
};

pub struct PipelineContext {
    pub dist_dir: PathBuf,
    pub version: FontVersion,
}

impl PipelineContext {
    pub fn new(dist_dir: PathBuf, version: Option<String>) -> Result<Self> {
        let version = FontVersion::parse(version.as_deref())?;
        Ok(Self { dist_dir, version })
    }

    pub fn dist_fonts(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        glob_fonts(&self.dist_dir, pattern)
    }

    /// The font files a full build produces.
    pub fn expected_fonts(&self) -> Vec<PathBuf> {
        FontFamily::ALL
            .iter()
            .flat_map(|family| {
                STYLES.iter().map(|style| self.dist_dir.join(family.file_name(style)))
            })
            .collect()
    }
}

pub fn run_step(
    name: &str,
    step_num: usize,
    total: usize,
    ctx: &PipelineContext,
    f: impl Fn(&PipelineContext) -> Result<()>,
) -> Result<()> {
    println!("\n[{step_num}/{total}] {name}");
    let start = Instant::now();
    f(ctx)?;
    println!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(())
}

pub fn run_steps(steps: &[PipelineStep], ctx: &PipelineContext) -> Result<()> {
    for (i, (name, step_fn)) in steps.iter().enumerate() {
        run_step(name, i + 1, steps.len(), ctx, step_fn)?;
    }
    Ok(())
}

pub fn build_all(dist_dir: &Path, version: Option<String>) -> Result<()> {
    let ctx = PipelineContext::new(dist_dir.to_path_buf(), version)?;
    let start = Instant::now();

    println!("═══════════════════════════════════════════════════════════════");
    println!("Mithila Fonts Build Pipeline");
    println!("═══════════════════════════════════════════════════════════════");

    run_steps(BUILD_STEPS, &ctx)?;

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("✨ Build complete in {:.2}s", start.elapsed().as_secs_f64());
    println!("   Output: {}", ctx.dist_dir.display());

    let font_count = ctx.dist_fonts(FONT_PATTERN)?.len();
    println!("   Fonts: {font_count}");
    println!("═══════════════════════════════════════════════════════════════");

    Ok(())
}
