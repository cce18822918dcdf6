//! Compile descriptors and re-read the results with read-fonts.

use mithila_font_builder::{FontDescriptor, FontVersion};
use mithila_glyph_shapes::{DEVANAGARI_SETS, fallback_recipe, recipe_for, shaped_recipes};
use read_fonts::{FontRef, TableProvider};

fn shaped_descriptor(style: &str) -> FontDescriptor {
    let mut descriptor = FontDescriptor::new("Mithila Sans", style)
        .with_version(FontVersion::parse(Some("2026-08-05")).unwrap())
        .with_copyright("Copyright 2026 The Mithila Fonts Project Authors");
    let table = shaped_recipes();
    for set in DEVANAGARI_SETS {
        for &cp in set.code_points {
            descriptor.add_glyph(cp, recipe_for(&table, cp));
        }
    }
    descriptor
}

#[test]
fn compiled_font_parses_and_covers_every_code_point() {
    let descriptor = shaped_descriptor("Regular");
    let data = descriptor.compile().expect("compile failed");

    let font = FontRef::new(&data).expect("parse compiled font");
    let cmap = font.cmap().expect("cmap");

    for set in DEVANAGARI_SETS {
        for &cp in set.code_points {
            assert!(cmap.map_codepoint(cp).is_some(), "missing U+{cp:04X}");
        }
    }

    let maxp = font.maxp().expect("maxp");
    assert_eq!(usize::from(maxp.num_glyphs()), descriptor.glyph_count() + 1);

    let head = font.head().expect("head");
    assert_eq!(head.units_per_em(), 1000);
}

#[test]
fn fallback_glyphs_keep_a_positive_advance() {
    // २ has no explicit recipe; the builder still gives it the blob.
    let descriptor = shaped_descriptor("Regular");
    let data = descriptor.compile().expect("compile failed");

    let font = FontRef::new(&data).expect("parse compiled font");
    let cmap = font.cmap().expect("cmap");
    let gid = cmap.map_codepoint(0x0968u32).expect("U+0968 missing");

    let hmtx = font.hmtx().expect("hmtx");
    let metric = hmtx.h_metrics().get(gid.to_u32() as usize).expect("metric");
    assert_eq!(metric.advance.get(), fallback_recipe().advance);
}

#[test]
fn vertical_metrics_follow_the_descriptor() {
    let data = shaped_descriptor("Regular").compile().expect("compile failed");
    let font = FontRef::new(&data).expect("parse compiled font");

    let hhea = font.hhea().expect("hhea");
    assert_eq!(hhea.ascender().to_i16(), 800);
    assert_eq!(hhea.descender().to_i16(), -200);
}

#[test]
fn bold_differs_only_in_metadata() {
    let regular = shaped_descriptor("Regular").compile().expect("regular");
    let bold_descriptor = shaped_descriptor("Bold").with_weight(700, true);
    let bold = bold_descriptor.compile().expect("bold");

    let regular_ref = FontRef::new(&regular).expect("parse regular");
    let bold_ref = FontRef::new(&bold).expect("parse bold");

    assert_eq!(
        regular_ref.maxp().expect("maxp").num_glyphs(),
        bold_ref.maxp().expect("maxp").num_glyphs()
    );
    assert_eq!(regular_ref.os2().expect("os2").us_weight_class(), 400);
    assert_eq!(bold_ref.os2().expect("os2").us_weight_class(), 700);
}

#[test]
fn compilation_is_deterministic() {
    let first = shaped_descriptor("Regular").compile().expect("first");
    let second = shaped_descriptor("Regular").compile().expect("second");
    assert_eq!(first, second);
}

#[test]
fn name_table_carries_the_full_naming_set() {
    let data = shaped_descriptor("Regular").compile().expect("compile failed");
    let font = FontRef::new(&data).expect("parse compiled font");
    let name = font.name().expect("name");

    let mut strings = std::collections::HashMap::new();
    for record in name.name_record() {
        if let Ok(s) = record.string(name.string_data()) {
            strings.insert(record.name_id().to_u16(), s.chars().collect::<String>());
        }
    }

    assert_eq!(strings.get(&1).map(String::as_str), Some("Mithila Sans"));
    assert_eq!(strings.get(&2).map(String::as_str), Some("Regular"));
    assert_eq!(strings.get(&4).map(String::as_str), Some("Mithila Sans Regular"));
    assert_eq!(strings.get(&5).map(String::as_str), Some("Version 2026-08-05"));
    assert_eq!(strings.get(&6).map(String::as_str), Some("MithilaSans-Regular"));
}
