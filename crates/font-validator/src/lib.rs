//! Read-only inspection of generated fonts.
//!
//! The validator reopens a font file, reports basic metadata, and computes
//! coverage over declared character sets. It never mutates anything; a
//! missing or unreadable file comes back as an error value for the caller
//! to report.

use std::{fs, io, path::{Path, PathBuf}, result};

use read_fonts::ReadError;
use skrifa::{
    FontRef, MetadataProvider,
    instance::{LocationRef, Size},
    string::StringId,
};
use thiserror::Error;

use mithila_glyph_shapes::{CharSet, KEY_CHARACTERS};

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("failed to read font file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse font: {0}")]
    Font(#[from] ReadError),
}

pub type Result<T> = result::Result<T, ValidateError>;

/// Basic metadata pulled from the font's name table and metrics.
#[derive(Debug, Clone)]
pub struct FontSummary {
    pub family: Option<String>,
    pub subfamily: Option<String>,
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub units_per_em: u16,
    pub ascent: f32,
    pub descent: f32,
    pub glyph_count: u16,
}

/// Coverage of one declared character set.
///
/// The denominator is the declared set size, so a set whose ten code points
/// are all mapped reports `10/10 (100.0%)`.
#[derive(Debug, Clone)]
pub struct SetCoverage {
    pub name: &'static str,
    pub present: usize,
    pub total: usize,
    pub missing: Vec<u32>,
}

impl SetCoverage {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.present as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.present == self.total
    }

    /// "present/total (pct%)", e.g. "10/10 (100.0%)".
    pub fn ratio(&self) -> String {
        format!("{}/{} ({:.1}%)", self.present, self.total, self.percent())
    }
}

/// Presence flag for one individually spot-checked character.
#[derive(Debug, Clone, Copy)]
pub struct KeyCharacter {
    pub code_point: u32,
    pub name: &'static str,
    pub present: bool,
}

/// Everything the validator learned about one font.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub summary: FontSummary,
    pub sets: Vec<SetCoverage>,
    pub key_characters: Vec<KeyCharacter>,
    /// File size in bytes; absent when validating in-memory data.
    pub file_size: Option<u64>,
}

impl CoverageReport {
    pub fn overall_present(&self) -> usize {
        self.sets.iter().map(|s| s.present).sum()
    }

    pub fn overall_total(&self) -> usize {
        self.sets.iter().map(|s| s.total).sum()
    }

    pub fn overall_percent(&self) -> f64 {
        let total = self.overall_total();
        if total == 0 {
            100.0
        } else {
            self.overall_present() as f64 / total as f64 * 100.0
        }
    }

    pub fn overall_ratio(&self) -> String {
        format!(
            "{}/{} ({:.1}%)",
            self.overall_present(),
            self.overall_total(),
            self.overall_percent()
        )
    }

    pub fn is_complete(&self) -> bool {
        self.sets.iter().all(SetCoverage::is_complete)
            && self.key_characters.iter().all(|k| k.present)
    }
}

fn name_string(font: &FontRef, id: StringId) -> Option<String> {
    font.localized_strings(id).english_or_first().map(|s| s.to_string())
}

/// Validate in-memory font data against the declared character sets.
pub fn validate_data(data: &[u8], sets: &[CharSet]) -> Result<CoverageReport> {
    let font = FontRef::new(data)?;
    let charmap = font.charmap();
    let metrics = font.metrics(Size::unscaled(), LocationRef::default());

    let summary = FontSummary {
        family: name_string(&font, StringId::FAMILY_NAME),
        subfamily: name_string(&font, StringId::SUBFAMILY_NAME),
        full_name: name_string(&font, StringId::FULL_NAME),
        version: name_string(&font, StringId::VERSION_STRING),
        units_per_em: metrics.units_per_em,
        ascent: metrics.ascent,
        descent: metrics.descent,
        glyph_count: metrics.glyph_count,
    };

    let sets = sets
        .iter()
        .map(|set| {
            let missing: Vec<u32> = set
                .code_points
                .iter()
                .copied()
                .filter(|&cp| charmap.map(cp).is_none())
                .collect();
            SetCoverage {
                name: set.name,
                present: set.len() - missing.len(),
                total: set.len(),
                missing,
            }
        })
        .collect();

    let key_characters = KEY_CHARACTERS
        .iter()
        .map(|&(code_point, name)| KeyCharacter {
            code_point,
            name,
            present: charmap.map(code_point).is_some(),
        })
        .collect();

    Ok(CoverageReport { summary, sets, key_characters, file_size: None })
}

/// Validate a font file against the declared character sets.
///
/// A missing or unreadable file is reported as [`ValidateError::Io`]; the
/// function never panics on bad input.
pub fn validate_file(path: &Path, sets: &[CharSet]) -> Result<CoverageReport> {
    let data = fs::read(path)
        .map_err(|source| ValidateError::Io { path: path.to_path_buf(), source })?;
    let mut report = validate_data(&data, sets)?;
    report.file_size = Some(data.len() as u64);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use mithila_font_builder::{FontDescriptor, FontVersion};
    use mithila_glyph_shapes::{DEVANAGARI_SETS, VOWELS, recipe_for, shaped_recipes};

    use super::*;

    fn compiled_font() -> Vec<u8> {
        let mut descriptor = FontDescriptor::new("Mithila Sans", "Regular")
            .with_version(FontVersion::parse(Some("2026-08-05")).unwrap());
        let table = shaped_recipes();
        for set in DEVANAGARI_SETS {
            for &cp in set.code_points {
                descriptor.add_glyph(cp, recipe_for(&table, cp));
            }
        }
        descriptor.compile().expect("compile")
    }

    #[test]
    fn complete_vowel_set_reports_ten_out_of_ten() {
        let data = compiled_font();
        let report = validate_data(&data, &[VOWELS]).unwrap();

        assert_eq!(report.sets.len(), 1);
        assert_eq!(report.sets[0].ratio(), "10/10 (100.0%)");
        assert!(report.is_complete());
    }

    #[test]
    fn overall_coverage_sums_declared_sets() {
        let data = compiled_font();
        let report = validate_data(&data, DEVANAGARI_SETS).unwrap();

        assert_eq!(report.overall_present(), 53);
        assert_eq!(report.overall_total(), 53);
        assert_eq!(report.overall_ratio(), "53/53 (100.0%)");
    }

    #[test]
    fn missing_code_points_are_listed() {
        let mut descriptor = FontDescriptor::new("Mithila Sans", "Regular");
        let table = shaped_recipes();
        // Cover only the first five vowels.
        for &cp in &VOWELS.code_points[..5] {
            descriptor.add_glyph(cp, recipe_for(&table, cp));
        }
        let data = descriptor.compile().expect("compile");

        let report = validate_data(&data, &[VOWELS]).unwrap();
        assert_eq!(report.sets[0].ratio(), "5/10 (50.0%)");
        assert_eq!(report.sets[0].missing.len(), 5);
        assert!(!report.is_complete());
    }

    #[test]
    fn summary_reflects_name_and_metrics() {
        let data = compiled_font();
        let report = validate_data(&data, DEVANAGARI_SETS).unwrap();

        assert_eq!(report.summary.family.as_deref(), Some("Mithila Sans"));
        assert_eq!(report.summary.full_name.as_deref(), Some("Mithila Sans Regular"));
        assert_eq!(report.summary.version.as_deref(), Some("Version 2026-08-05"));
        assert_eq!(report.summary.units_per_em, 1000);
        assert_eq!(report.summary.ascent, 800.0);
        assert_eq!(report.summary.descent, -200.0);
    }

    #[test]
    fn missing_file_is_an_error_value() {
        let result = validate_file(Path::new("no/such/font.ttf"), DEVANAGARI_SETS);
        assert!(matches!(result, Err(ValidateError::Io { .. })));
    }

    #[test]
    fn garbage_data_is_a_font_error() {
        let result = validate_data(b"not a font", DEVANAGARI_SETS);
        assert!(matches!(result, Err(ValidateError::Font(_))));
    }

    #[test]
    fn key_characters_present_in_arbitrary_real_font() {
        // A Latin test font maps none of the Devanagari key characters.
        let report = validate_data(font_test_data::VAZIRMATN_VAR, DEVANAGARI_SETS).unwrap();
        assert!(report.key_characters.iter().all(|k| !k.present));
    }
}
