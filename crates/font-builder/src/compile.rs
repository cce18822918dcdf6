//! Table assembly for a [`FontDescriptor`](crate::FontDescriptor).

use kurbo::{BezPath, CubicBez, PathEl, Point, Rect, Shape};
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        glyf::{GlyfLocaBuilder, SimpleGlyph},
        head::{Flags, Head, MacStyle},
        hhea::Hhea,
        hmtx::{Hmtx, LongMetric},
        loca::LocaFormat,
        maxp::Maxp,
        name::{Name, NameRecord},
        os2::{Os2, SelectionFlags},
        post::Post,
    },
    types::{FWord, Fixed, GlyphId, NameId, Tag, UfWord, Version16Dot16},
};

use crate::{
    FontDescriptor,
    error::{BuildError, Result},
};

/// Name table IDs.
const NAME_ID_COPYRIGHT: u16 = 0;
const NAME_ID_FAMILY: u16 = 1;
const NAME_ID_SUBFAMILY: u16 = 2;
const NAME_ID_UNIQUE_ID: u16 = 3;
const NAME_ID_FULL_NAME: u16 = 4;
const NAME_ID_VERSION: u16 = 5;
const NAME_ID_POSTSCRIPT: u16 = 6;

/// Windows platform / Unicode BMP encoding / US English.
const WINDOWS_PLATFORM: (u16, u16, u16) = (3, 1, 0x409);

/// Advance width of the `.notdef` glyph.
const NOTDEF_ADVANCE: u16 = 500;

/// Maximum deviation, in font units, when flattening cubic segments to
/// quadratics for the glyf table.
const CUBIC_ACCURACY: f64 = 1.0;

/// Rewrite a path so it contains only line and quadratic segments, which is
/// all a glyf outline can carry.
fn to_quadratic(path: &BezPath) -> BezPath {
    let mut quads = BezPath::new();
    let mut last = Point::ZERO;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                quads.move_to(p);
                last = p;
            }
            PathEl::LineTo(p) => {
                quads.line_to(p);
                last = p;
            }
            PathEl::QuadTo(c, p) => {
                quads.quad_to(c, p);
                last = p;
            }
            PathEl::CurveTo(c0, c1, p) => {
                for (_, _, quad) in CubicBez::new(last, c0, c1, p).to_quads(CUBIC_ACCURACY) {
                    quads.quad_to(quad.p1, quad.p2);
                }
                last = p;
            }
            PathEl::ClosePath => quads.close_path(),
        }
    }
    quads
}

struct CompiledGlyphs {
    glyf_builder: GlyfLocaBuilder,
    metrics: Vec<LongMetric>,
    mappings: Vec<(char, GlyphId)>,
    bounds: Option<Rect>,
    max_points: u16,
    max_contours: u16,
}

fn compile_glyphs(descriptor: &FontDescriptor) -> Result<CompiledGlyphs> {
    let mut compiled = CompiledGlyphs {
        glyf_builder: GlyfLocaBuilder::new(),
        metrics: Vec::with_capacity(descriptor.glyph_count() + 1),
        mappings: Vec::with_capacity(descriptor.glyph_count()),
        bounds: None,
        max_points: 0,
        max_contours: 0,
    };

    // Glyph 0 is .notdef; recipes follow in insertion order.
    compiled.glyf_builder.add_glyph(&SimpleGlyph::default())?;
    compiled.metrics.push(LongMetric { advance: NOTDEF_ADVANCE, side_bearing: 0 });

    for (index, (&code_point, recipe)) in descriptor.glyphs().iter().enumerate() {
        let ch = char::from_u32(code_point)
            .ok_or(BuildError::InvalidCodePoint(code_point))?;

        let mut side_bearing = 0;
        let glyph = if recipe.is_blank() {
            SimpleGlyph::default()
        } else {
            let quads = to_quadratic(&recipe.outline);
            let bbox = quads.bounding_box();
            side_bearing = bbox.min_x().floor() as i16;
            compiled.bounds = Some(match compiled.bounds {
                Some(union) => union.union(bbox),
                None => bbox,
            });
            SimpleGlyph::from_bezpath(&quads).map_err(|e| BuildError::BadOutline {
                code_point,
                detail: format!("{e:?}"),
            })?
        };

        let points: usize = glyph.contours.iter().map(|c| c.len()).sum();
        compiled.max_points = compiled.max_points.max(points as u16);
        compiled.max_contours = compiled.max_contours.max(glyph.contours.len() as u16);

        compiled.glyf_builder.add_glyph(&glyph)?;
        compiled.metrics.push(LongMetric { advance: recipe.advance, side_bearing });
        compiled.mappings.push((ch, GlyphId::new(index as u32 + 1)));
    }

    Ok(compiled)
}

fn name_record(name_id: u16, value: String) -> NameRecord {
    let (platform, encoding, language) = WINDOWS_PLATFORM;
    NameRecord::new(platform, encoding, language, NameId::new(name_id), value.into())
}

fn build_name(descriptor: &FontDescriptor) -> Name {
    let mut records = vec![
        name_record(NAME_ID_COPYRIGHT, descriptor.copyright.clone()),
        name_record(NAME_ID_FAMILY, descriptor.family.clone()),
        name_record(NAME_ID_SUBFAMILY, descriptor.style.clone()),
        name_record(NAME_ID_UNIQUE_ID, descriptor.unique_id()),
        name_record(NAME_ID_FULL_NAME, descriptor.full_name()),
        name_record(NAME_ID_VERSION, descriptor.version.version_string()),
        name_record(NAME_ID_POSTSCRIPT, descriptor.postscript_name()),
    ];
    records.sort();
    Name::new(records)
}

pub(crate) fn compile(descriptor: &FontDescriptor) -> Result<Vec<u8>> {
    let compiled = compile_glyphs(descriptor)?;
    let glyph_count = compiled.metrics.len() as u16;
    let (glyf, loca, loca_format) = compiled.glyf_builder.build();
    let cmap = Cmap::from_mappings(compiled.mappings)?;

    let bounds = compiled.bounds.unwrap_or(Rect::ZERO);
    let x_min = bounds.min_x().floor() as i16;
    let y_min = bounds.min_y().floor() as i16;
    let x_max = bounds.max_x().ceil() as i16;
    let y_max = bounds.max_y().ceil() as i16;

    let metrics = &descriptor.metrics;
    let timestamp = descriptor.version.timestamp();

    let head = Head {
        font_revision: descriptor.version.revision(),
        checksum_adjustment: 0,
        magic_number: 0x5F0F3CF5,
        flags: Flags::empty(),
        units_per_em: metrics.units_per_em,
        created: timestamp,
        modified: timestamp,
        x_min,
        y_min,
        x_max,
        y_max,
        mac_style: if descriptor.bold { MacStyle::BOLD } else { MacStyle::empty() },
        lowest_rec_ppem: 8,
        font_direction_hint: 2,
        index_to_loc_format: match loca_format {
            LocaFormat::Short => 0,
            LocaFormat::Long => 1,
        },
    };

    let advance_width_max =
        compiled.metrics.iter().map(|m| m.advance).max().unwrap_or_default();
    let min_left_side_bearing =
        compiled.metrics.iter().map(|m| m.side_bearing).min().unwrap_or_default();

    let hhea = Hhea {
        ascender: FWord::new(metrics.ascent),
        descender: FWord::new(-metrics.descent),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(advance_width_max),
        min_left_side_bearing: FWord::new(min_left_side_bearing),
        min_right_side_bearing: FWord::new(0),
        x_max_extent: FWord::new(x_max),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics: glyph_count,
    };

    let hmtx = Hmtx { h_metrics: compiled.metrics, left_side_bearings: vec![] };

    let maxp = Maxp {
        num_glyphs: glyph_count,
        max_points: Some(compiled.max_points),
        max_contours: Some(compiled.max_contours),
        max_composite_points: Some(0),
        max_composite_contours: Some(0),
        max_zones: Some(1),
        max_twilight_points: Some(0),
        max_storage: Some(0),
        max_function_defs: Some(0),
        max_instruction_defs: Some(0),
        max_stack_elements: Some(0),
        max_size_of_instructions: Some(0),
        max_component_elements: Some(0),
        max_component_depth: Some(0),
    };

    let post = Post {
        version: Version16Dot16::VERSION_3_0,
        italic_angle: Fixed::from_f64(0.0),
        underline_position: FWord::new(-100),
        underline_thickness: FWord::new(50),
        is_fixed_pitch: 0,
        min_mem_type42: 0,
        max_mem_type42: 0,
        min_mem_type1: 0,
        max_mem_type1: 0,
        num_glyphs: Some(glyph_count),
        glyph_name_index: None,
        string_data: None,
    };

    let os2 = build_os2(descriptor);
    let name = build_name(descriptor);

    let mut builder = FontBuilder::new();
    builder.add_table(&head)?;
    builder.add_table(&hhea)?;
    builder.add_table(&hmtx)?;
    builder.add_table(&maxp)?;
    builder.add_table(&cmap)?;
    builder.add_table(&post)?;
    builder.add_table(&glyf)?;
    builder.add_table(&loca)?;
    builder.add_table(&os2)?;
    builder.add_table(&name)?;

    Ok(builder.build())
}

fn build_os2(descriptor: &FontDescriptor) -> Os2 {
    let metrics = &descriptor.metrics;
    let code_points = descriptor.glyphs().keys();
    let first_char = code_points.clone().min().copied().unwrap_or_default();
    let last_char = code_points.max().copied().unwrap_or_default();

    let total_advance: u32 =
        descriptor.glyphs().values().map(|r| u32::from(r.advance)).sum();
    let x_avg_char_width = match descriptor.glyph_count() {
        0 => 0,
        count => (total_advance / count as u32) as i16,
    };

    let fs_selection =
        if descriptor.bold { SelectionFlags::BOLD } else { SelectionFlags::REGULAR };

    Os2 {
        x_avg_char_width,
        us_weight_class: descriptor.weight_class,
        us_width_class: 5,
        fs_type: 0,
        y_subscript_x_size: 650,
        y_subscript_y_size: 600,
        y_subscript_x_offset: 0,
        y_subscript_y_offset: 75,
        y_superscript_x_size: 650,
        y_superscript_y_size: 600,
        y_superscript_x_offset: 0,
        y_superscript_y_offset: 350,
        y_strikeout_size: 50,
        y_strikeout_position: 300,
        s_family_class: 0,
        panose_10: [0; 10],
        ul_unicode_range_1: 0,
        ul_unicode_range_2: 0,
        ul_unicode_range_3: 0,
        ul_unicode_range_4: 0,
        ach_vend_id: Tag::new(b"MTHL"),
        fs_selection,
        us_first_char_index: first_char.min(u32::from(u16::MAX)) as u16,
        us_last_char_index: last_char.min(u32::from(u16::MAX)) as u16,
        s_typo_ascender: metrics.ascent,
        s_typo_descender: -metrics.descent,
        s_typo_line_gap: 0,
        us_win_ascent: metrics.ascent.max(0) as u16,
        us_win_descent: metrics.descent.max(0) as u16,
        ul_code_page_range_1: Some(0),
        ul_code_page_range_2: Some(0),
        sx_height: Some(500),
        s_cap_height: Some(metrics.ascent),
        us_default_char: Some(0),
        us_break_char: Some(0x20),
        us_max_context: Some(0),
        us_lower_optical_point_size: None,
        us_upper_optical_point_size: None,
    }
}
