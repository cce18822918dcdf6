//! Outline recipes for the Mithila prototype glyph sets.
//!
//! Two recipe tables are provided: a placeholder set where every covered
//! character is a nested-rectangle block, and a shaped set with
//! recognizable sketches for the most important letters. Both map code
//! points to [`GlyphRecipe`] values; anything outside a table falls through
//! to a generic rounded blob via [`recipe_for`].

pub mod charset;
pub mod outlines;
mod recipe;

pub use charset::{CONSONANTS, CharSet, DEVANAGARI_SETS, DIGITS, KEY_CHARACTERS, VOWELS};
pub use outlines::{HEADLINE_BOTTOM, HEADLINE_TOP};
pub use recipe::GlyphRecipe;

use indexmap::IndexMap;

/// Advance width of the space character.
pub const SPACE_ADVANCE: u16 = 250;

/// Latin letters kept for smoke tests in Latin-only environments.
pub const LATIN_STUBS: &[u32] = &[0x0041, 0x0042, 0x0043];

/// Recipe table for the draft set: every covered character is the
/// nested-rectangle placeholder.
pub fn placeholder_recipes() -> IndexMap<u32, GlyphRecipe> {
    let mut table = IndexMap::new();
    for set in DEVANAGARI_SETS {
        for &cp in set.code_points {
            table.insert(cp, outlines::placeholder());
        }
    }
    for &cp in LATIN_STUBS {
        table.insert(cp, outlines::placeholder());
    }
    table.insert(0x0020, GlyphRecipe::empty(SPACE_ADVANCE));
    table
}

/// Recipe table for the shaped set.
///
/// अ, आ, इ, क, ० and १ have dedicated sketches; the remaining vowels share
/// an oval body and the remaining consonants go through the
/// [`outlines::consonant_variant`] variety rule. Digits २–९ are deliberately
/// absent so they exercise the fallback path.
pub fn shaped_recipes() -> IndexMap<u32, GlyphRecipe> {
    let mut table = IndexMap::new();
    table.insert(0x0020, GlyphRecipe::empty(SPACE_ADVANCE));
    for &cp in LATIN_STUBS {
        table.insert(cp, outlines::latin_stub());
    }

    table.insert(0x0905, outlines::vowel_a());
    table.insert(0x0906, outlines::vowel_aa());
    table.insert(0x0907, outlines::vowel_i());
    for &cp in &VOWELS.code_points[3..] {
        table.insert(cp, outlines::vowel_default());
    }

    table.insert(CONSONANTS.code_points[0], outlines::consonant_ka());
    for (index, &cp) in CONSONANTS.code_points[1..].iter().enumerate() {
        table.insert(cp, outlines::consonant_variant(index));
    }

    table.insert(0x0966, outlines::digit_zero());
    table.insert(0x0967, outlines::digit_one());
    table
}

/// The blob every uncovered code point resolves to.
pub fn fallback_recipe() -> GlyphRecipe {
    outlines::fallback()
}

/// Look up a recipe, falling through to the generic blob for anything the
/// table does not cover. Never fails; the result always has a positive
/// advance width.
pub fn recipe_for(table: &IndexMap<u32, GlyphRecipe>, code_point: u32) -> GlyphRecipe {
    table.get(&code_point).cloned().unwrap_or_else(fallback_recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_table_covers_everything_declared() {
        let table = placeholder_recipes();
        for set in DEVANAGARI_SETS {
            for cp in set.code_points {
                assert!(table.contains_key(cp), "missing U+{cp:04X}");
            }
        }
        // 53 Devanagari + 3 Latin + space
        assert_eq!(table.len(), 57);
    }

    #[test]
    fn shaped_table_covers_letters_but_not_high_digits() {
        let table = shaped_recipes();
        for cp in VOWELS.code_points.iter().chain(CONSONANTS.code_points) {
            assert!(table.contains_key(cp), "missing U+{cp:04X}");
        }
        assert!(table.contains_key(&0x0966));
        assert!(table.contains_key(&0x0967));
        for cp in &DIGITS.code_points[2..] {
            assert!(!table.contains_key(cp), "unexpected recipe for U+{cp:04X}");
        }
    }

    #[test]
    fn uncovered_code_point_falls_back_to_the_blob() {
        let table = shaped_recipes();
        let recipe = recipe_for(&table, 0x0968); // २
        assert_eq!(recipe, fallback_recipe());
        assert!(recipe.advance > 0);
        assert!(!recipe.is_blank());
    }

    #[test]
    fn space_is_blank_with_a_positive_advance() {
        let table = shaped_recipes();
        let space = &table[&0x0020];
        assert!(space.is_blank());
        assert_eq!(space.advance, SPACE_ADVANCE);
    }

    #[test]
    fn tables_are_deterministic() {
        let first: Vec<u32> = shaped_recipes().keys().copied().collect();
        let second: Vec<u32> = shaped_recipes().keys().copied().collect();
        assert_eq!(first, second);

        let first: Vec<u32> = placeholder_recipes().keys().copied().collect();
        let second: Vec<u32> = placeholder_recipes().keys().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn consonant_variety_differs_between_neighbors() {
        let table = shaped_recipes();
        // ख (index 0, sweep) and ग (index 1, ring) share an advance but not
        // an outline.
        let kha = &table[&0x0916];
        let ga = &table[&0x0917];
        assert_eq!(kha.advance, ga.advance);
        assert_ne!(kha.outline.elements(), ga.outline.elements());
    }
}
