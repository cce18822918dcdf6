//! Literal outline data for the prototype glyph set.
//!
//! Every routine returns a finished [`GlyphRecipe`] in the shared coordinate
//! convention: 1000 units per em, baseline at y=0, letter bodies between
//! roughly y=200 and y=650, and the headline bar spanning y=630 to y=650.
//! These are sketches for visual prototyping, not production letterforms.

use kurbo::BezPath;

use crate::recipe::GlyphRecipe;

/// Top edge of the headline bar.
pub const HEADLINE_TOP: f64 = 650.0;
/// Bottom edge of the headline bar.
pub const HEADLINE_BOTTOM: f64 = 630.0;

const LETTER_ADVANCE: u16 = 400;
const WIDE_LETTER_ADVANCE: u16 = 500;
const PLACEHOLDER_ADVANCE: u16 = 500;
const FALLBACK_ADVANCE: u16 = 400;

fn headline(path: &mut BezPath, left: f64, right: f64) {
    path.move_to((left, HEADLINE_TOP));
    path.line_to((right, HEADLINE_TOP));
    path.line_to((right, HEADLINE_BOTTOM));
    path.line_to((left, HEADLINE_BOTTOM));
    path.close_path();
}

fn stem(path: &mut BezPath, left: f64, right: f64, bottom: f64, top: f64) {
    path.move_to((left, bottom));
    path.line_to((right, bottom));
    path.line_to((right, top));
    path.line_to((left, top));
    path.close_path();
}

/// अ — a closed bowl hanging from the headline.
pub fn vowel_a() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((80.0, 500.0));
    path.curve_to((80.0, 600.0), (120.0, 650.0), (200.0, 650.0));
    path.curve_to((280.0, 650.0), (320.0, 600.0), (320.0, 500.0));
    path.curve_to((320.0, 400.0), (280.0, 350.0), (200.0, 350.0));
    path.curve_to((120.0, 350.0), (80.0, 400.0), (80.0, 500.0));
    path.close_path();
    headline(&mut path, 50.0, 350.0);
    GlyphRecipe::new(path, LETTER_ADVANCE)
}

/// आ — a ring beside a full-height stem.
pub fn vowel_aa() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((150.0, 350.0));
    path.curve_to((100.0, 350.0), (60.0, 390.0), (60.0, 450.0));
    path.curve_to((60.0, 510.0), (100.0, 550.0), (150.0, 550.0));
    path.curve_to((200.0, 550.0), (240.0, 510.0), (240.0, 450.0));
    path.curve_to((240.0, 390.0), (200.0, 350.0), (150.0, 350.0));
    path.close_path();
    stem(&mut path, 280.0, 320.0, 200.0, 650.0);
    headline(&mut path, 50.0, 450.0);
    GlyphRecipe::new(path, WIDE_LETTER_ADVANCE)
}

/// इ — a stem that hooks to the right below the headline.
pub fn vowel_i() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((150.0, 200.0));
    path.line_to((190.0, 200.0));
    path.line_to((190.0, 500.0));
    path.curve_to((190.0, 550.0), (220.0, 580.0), (270.0, 580.0));
    path.curve_to((320.0, 580.0), (350.0, 550.0), (350.0, 500.0));
    path.line_to((350.0, 480.0));
    path.curve_to((350.0, 520.0), (290.0, 540.0), (270.0, 540.0));
    path.curve_to((250.0, 540.0), (230.0, 520.0), (230.0, 500.0));
    path.line_to((230.0, 200.0));
    path.line_to((150.0, 200.0));
    path.close_path();
    headline(&mut path, 50.0, 450.0);
    GlyphRecipe::new(path, WIDE_LETTER_ADVANCE)
}

/// Generic vowel body: an oval under the headline.
pub fn vowel_default() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((100.0, 400.0));
    path.curve_to((100.0, 500.0), (150.0, 550.0), (250.0, 550.0));
    path.curve_to((350.0, 550.0), (400.0, 500.0), (400.0, 400.0));
    path.curve_to((400.0, 300.0), (350.0, 250.0), (250.0, 250.0));
    path.curve_to((150.0, 250.0), (100.0, 300.0), (100.0, 400.0));
    path.close_path();
    headline(&mut path, 50.0, 450.0);
    GlyphRecipe::new(path, WIDE_LETTER_ADVANCE)
}

/// क — a full-height stem with a looped arm.
pub fn consonant_ka() -> GlyphRecipe {
    let mut path = BezPath::new();
    stem(&mut path, 100.0, 120.0, 200.0, 650.0);
    path.move_to((120.0, 400.0));
    path.curve_to((150.0, 420.0), (200.0, 430.0), (250.0, 420.0));
    path.curve_to((300.0, 410.0), (320.0, 380.0), (320.0, 350.0));
    path.curve_to((320.0, 320.0), (300.0, 290.0), (250.0, 280.0));
    path.curve_to((200.0, 270.0), (150.0, 280.0), (120.0, 300.0));
    path.line_to((120.0, 320.0));
    path.curve_to((140.0, 310.0), (180.0, 300.0), (220.0, 310.0));
    path.curve_to((260.0, 320.0), (280.0, 340.0), (280.0, 360.0));
    path.curve_to((280.0, 380.0), (260.0, 400.0), (220.0, 410.0));
    path.curve_to((180.0, 420.0), (140.0, 410.0), (120.0, 400.0));
    path.close_path();
    headline(&mut path, 50.0, 350.0);
    GlyphRecipe::new(path, LETTER_ADVANCE)
}

/// Generic consonant with a variety rule keyed on the position `index` in
/// the consonant list: the stem shifts by `index % 3` steps and every
/// fourth letter alternates between a right-hand sweep and a ring.
pub fn consonant_variant(index: usize) -> GlyphRecipe {
    let dx = (index % 3) as f64 * 20.0;
    let mut path = BezPath::new();
    stem(&mut path, 100.0 + dx, 120.0 + dx, 200.0, 650.0);

    match index % 4 {
        0 => {
            // Sweep off the stem toward the right.
            path.move_to((120.0 + dx, 350.0));
            path.curve_to((180.0, 370.0), (220.0, 350.0), (250.0, 320.0));
            path.curve_to((280.0, 290.0), (250.0, 260.0), (220.0, 280.0));
            path.curve_to((180.0, 300.0), (140.0, 320.0), (120.0 + dx, 330.0));
            path.close_path();
        }
        1 => {
            // Ring beside the stem.
            path.move_to((200.0, 350.0));
            path.curve_to((250.0, 350.0), (290.0, 390.0), (290.0, 440.0));
            path.curve_to((290.0, 490.0), (250.0, 530.0), (200.0, 530.0));
            path.curve_to((150.0, 530.0), (110.0, 490.0), (110.0, 440.0));
            path.curve_to((110.0, 390.0), (150.0, 350.0), (200.0, 350.0));
            path.close_path();
        }
        _ => {}
    }

    headline(&mut path, 50.0, 350.0);
    GlyphRecipe::new(path, LETTER_ADVANCE)
}

/// ० — concentric circles.
pub fn digit_zero() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((200.0, 300.0));
    path.curve_to((280.0, 300.0), (350.0, 370.0), (350.0, 450.0));
    path.curve_to((350.0, 530.0), (280.0, 600.0), (200.0, 600.0));
    path.curve_to((120.0, 600.0), (50.0, 530.0), (50.0, 450.0));
    path.curve_to((50.0, 370.0), (120.0, 300.0), (200.0, 300.0));
    path.close_path();
    path.move_to((200.0, 350.0));
    path.curve_to((150.0, 350.0), (100.0, 395.0), (100.0, 450.0));
    path.curve_to((100.0, 505.0), (150.0, 550.0), (200.0, 550.0));
    path.curve_to((250.0, 550.0), (300.0, 505.0), (300.0, 450.0));
    path.curve_to((300.0, 395.0), (250.0, 350.0), (200.0, 350.0));
    path.close_path();
    GlyphRecipe::new(path, LETTER_ADVANCE)
}

/// १ — a stem with a hook at the top.
pub fn digit_one() -> GlyphRecipe {
    let mut path = BezPath::new();
    stem(&mut path, 180.0, 220.0, 200.0, 600.0);
    path.move_to((150.0, 550.0));
    path.curve_to((150.0, 580.0), (170.0, 600.0), (200.0, 600.0));
    path.line_to((220.0, 600.0));
    path.line_to((220.0, 580.0));
    path.curve_to((220.0, 570.0), (210.0, 560.0), (200.0, 560.0));
    path.curve_to((180.0, 560.0), (160.0, 570.0), (150.0, 580.0));
    path.close_path();
    GlyphRecipe::new(path, LETTER_ADVANCE)
}

/// Latin smoke-test letter: a baseline bar plus a stem.
pub fn latin_stub() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((50.0, 200.0));
    path.line_to((350.0, 200.0));
    path.line_to((350.0, 220.0));
    path.line_to((50.0, 220.0));
    path.close_path();
    stem(&mut path, 180.0, 220.0, 200.0, 600.0);
    GlyphRecipe::new(path, LETTER_ADVANCE)
}

/// Nested rectangles used by the draft (placeholder) set.
pub fn placeholder() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((50.0, 50.0));
    path.line_to((50.0, 650.0));
    path.line_to((450.0, 650.0));
    path.line_to((450.0, 50.0));
    path.close_path();
    path.move_to((100.0, 100.0));
    path.line_to((100.0, 600.0));
    path.line_to((400.0, 600.0));
    path.line_to((400.0, 100.0));
    path.close_path();
    GlyphRecipe::new(path, PLACEHOLDER_ADVANCE)
}

/// Rounded blob used for any code point without an explicit recipe.
pub fn fallback() -> GlyphRecipe {
    let mut path = BezPath::new();
    path.move_to((100.0, 380.0));
    path.curve_to((100.0, 480.0), (160.0, 540.0), (250.0, 540.0));
    path.curve_to((340.0, 540.0), (400.0, 480.0), (400.0, 380.0));
    path.curve_to((400.0, 280.0), (340.0, 220.0), (250.0, 220.0));
    path.curve_to((160.0, 220.0), (100.0, 280.0), (100.0, 380.0));
    path.close_path();
    GlyphRecipe::new(path, FALLBACK_ADVANCE)
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;

    use super::*;

    #[test]
    fn letters_reach_the_headline() {
        for recipe in [vowel_a(), vowel_aa(), vowel_default(), consonant_ka()] {
            let bbox = recipe.outline.bounding_box();
            assert_eq!(bbox.max_y(), HEADLINE_TOP);
        }
    }

    #[test]
    fn outlines_stay_inside_the_em_box() {
        let everything = [
            vowel_a(),
            vowel_aa(),
            vowel_i(),
            vowel_default(),
            consonant_ka(),
            consonant_variant(0),
            consonant_variant(1),
            consonant_variant(2),
            consonant_variant(3),
            digit_zero(),
            digit_one(),
            latin_stub(),
            placeholder(),
            fallback(),
        ];
        for recipe in everything {
            let bbox = recipe.outline.bounding_box();
            assert!(bbox.min_x() >= 0.0 && bbox.max_x() <= 1000.0, "{bbox:?}");
            assert!(bbox.min_y() >= 0.0 && bbox.max_y() <= 1000.0, "{bbox:?}");
            assert!(recipe.advance > 0);
        }
    }

    #[test]
    fn variety_rule_changes_decoration_by_index() {
        let sweep = consonant_variant(0);
        let ring = consonant_variant(1);
        let bare = consonant_variant(2);
        // index % 4 picks the decoration; 2 and 3 keep only stem + headline.
        assert!(sweep.outline.elements().len() > bare.outline.elements().len());
        assert_ne!(sweep.outline.elements(), ring.outline.elements());
    }

    #[test]
    fn bare_variants_still_have_a_stem_and_headline() {
        let recipe = consonant_variant(3);
        assert!(!recipe.is_blank());
        assert_eq!(recipe.outline.bounding_box().max_y(), HEADLINE_TOP);
    }
}
