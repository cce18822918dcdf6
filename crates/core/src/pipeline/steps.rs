//! Pipeline step definitions.

use anyhow::Result;
use mithila_font_report::{ReportFonts, write_reports};

use super::{PipelineContext, build::build_family, validate::validate_paths};
use crate::families::FontFamily;

pub type PipelineStep = (&'static str, fn(&PipelineContext) -> Result<()>);

pub const BUILD_STEPS: &[PipelineStep] = &[
    ("build-draft", step_build_draft),
    ("build-sans", step_build_sans),
    ("write-reports", step_write_reports),
    ("validate", step_validate),
];

fn step_build_draft(ctx: &PipelineContext) -> Result<()> {
    build_family(ctx, FontFamily::Draft)
}

fn step_build_sans(ctx: &PipelineContext) -> Result<()> {
    build_family(ctx, FontFamily::Sans)
}

fn step_write_reports(ctx: &PipelineContext) -> Result<()> {
    let written = write_reports(&ctx.dist_dir, &report_fonts())?;
    for path in written {
        println!("  Wrote {}", path.display());
    }
    Ok(())
}

fn step_validate(ctx: &PipelineContext) -> Result<()> {
    validate_paths(&ctx.expected_fonts())
}

/// The review pages showcase the shaped family.
pub fn report_fonts() -> ReportFonts<'static> {
    let family = FontFamily::Sans;
    ReportFonts {
        family: family.family_name(),
        regular_file: "MithilaSans-Regular.ttf",
        bold_file: "MithilaSans-Bold.ttf",
    }
}

#[cfg(test)]
mod tests {
    use crate::styles::STYLES;

    use super::*;

    #[test]
    fn report_fonts_match_the_sans_file_names() {
        let fonts = report_fonts();
        let family = FontFamily::Sans;
        assert_eq!(fonts.regular_file, family.file_name(&STYLES[0]));
        assert_eq!(fonts.bold_file, family.file_name(&STYLES[1]));
    }
}
