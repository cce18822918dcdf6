//! The two font families this pipeline produces.

use indexmap::IndexMap;
use mithila_font_builder::{FontDescriptor, FontVersion};
use mithila_glyph_shapes::{
    DEVANAGARI_SETS, GlyphRecipe, placeholder_recipes, recipe_for, shaped_recipes,
};

use crate::{config::COPYRIGHT, styles::Style};

/// A font family paired with the recipe table that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    /// Nested-rectangle placeholders for every covered character.
    Draft,
    /// Recognizable outline sketches.
    Sans,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::Draft, FontFamily::Sans];

    pub fn family_name(self) -> &'static str {
        match self {
            FontFamily::Draft => "Mithila Draft",
            FontFamily::Sans => "Mithila Sans",
        }
    }

    pub fn file_prefix(self) -> &'static str {
        match self {
            FontFamily::Draft => "MithilaDraft",
            FontFamily::Sans => "MithilaSans",
        }
    }

    pub fn file_name(self, style: &Style) -> String {
        format!("{}-{}.ttf", self.file_prefix(), style.name)
    }

    pub fn recipes(self) -> IndexMap<u32, GlyphRecipe> {
        match self {
            FontFamily::Draft => placeholder_recipes(),
            FontFamily::Sans => shaped_recipes(),
        }
    }

    /// Assemble the descriptor for one style of this family.
    ///
    /// Every entry of the recipe table is included, then any declared
    /// Devanagari code point the table misses is filled with the fallback
    /// blob so the font always covers the full character sets.
    pub fn descriptor(self, style: &Style, version: &FontVersion) -> FontDescriptor {
        let table = self.recipes();
        let mut descriptor = FontDescriptor::new(self.family_name(), style.name)
            .with_weight(style.weight_class, style.bold)
            .with_copyright(COPYRIGHT)
            .with_version(version.clone());

        descriptor.add_recipes(table.clone());
        for set in DEVANAGARI_SETS {
            for &cp in set.code_points {
                if !descriptor.contains(cp) {
                    descriptor.add_glyph(cp, recipe_for(&table, cp));
                }
            }
        }
        descriptor
    }
}

#[cfg(test)]
mod tests {
    use crate::styles::STYLES;

    use super::*;

    #[test]
    fn file_names_follow_the_prefix_style_convention() {
        assert_eq!(FontFamily::Sans.file_name(&STYLES[0]), "MithilaSans-Regular.ttf");
        assert_eq!(FontFamily::Draft.file_name(&STYLES[1]), "MithilaDraft-Bold.ttf");
    }

    #[test]
    fn descriptors_cover_every_declared_code_point() {
        let version = FontVersion::parse(Some("2026-08-05")).unwrap();
        for family in FontFamily::ALL {
            let descriptor = family.descriptor(&STYLES[0], &version);
            for set in DEVANAGARI_SETS {
                for &cp in set.code_points {
                    assert!(descriptor.contains(cp), "{family:?} missing U+{cp:04X}");
                }
            }
        }
    }

    #[test]
    fn both_families_produce_the_same_code_point_set() {
        let version = FontVersion::parse(Some("2026-08-05")).unwrap();
        let mut draft: Vec<u32> = FontFamily::Draft
            .descriptor(&STYLES[0], &version)
            .code_points()
            .collect();
        let mut sans: Vec<u32> =
            FontFamily::Sans.descriptor(&STYLES[0], &version).code_points().collect();
        draft.sort_unstable();
        sans.sort_unstable();
        assert_eq!(draft, sans);
    }
}
