//! In-memory font descriptors and TTF compilation for the Mithila
//! prototype fonts.
//!
//! A [`FontDescriptor`] aggregates glyph recipes and metadata; [`compile`]
//! (via [`FontDescriptor::compile`]) hands the actual table construction and
//! binary serialization to `write-fonts`.

mod compile;
mod error;
mod version;

use indexmap::IndexMap;
use mithila_glyph_shapes::GlyphRecipe;

pub use error::{BuildError, Result};
pub use version::FontVersion;

/// Vertical metrics shared by every font this crate produces.
///
/// `descent` is the distance below the baseline, so it is positive here and
/// negated where the hhea and OS/2 tables want a signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascent: i16,
    pub descent: i16,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { units_per_em: 1000, ascent: 800, descent: 200 }
    }
}

/// Everything needed to compile one font: naming, metrics, version, and the
/// code point → recipe map.
///
/// Code points are unique within a descriptor: re-adding one replaces its
/// recipe rather than producing a duplicate.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    pub family: String,
    pub style: String,
    pub weight_class: u16,
    pub bold: bool,
    pub copyright: String,
    pub version: FontVersion,
    pub metrics: FontMetrics,
    glyphs: IndexMap<u32, GlyphRecipe>,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
            weight_class: 400,
            bold: false,
            copyright: String::new(),
            version: FontVersion::default(),
            metrics: FontMetrics::default(),
            glyphs: IndexMap::new(),
        }
    }

    pub fn with_weight(mut self, weight_class: u16, bold: bool) -> Self {
        self.weight_class = weight_class;
        self.bold = bold;
        self
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    pub fn with_version(mut self, version: FontVersion) -> Self {
        self.version = version;
        self
    }

    /// Add one glyph. A code point already present is replaced.
    pub fn add_glyph(&mut self, code_point: u32, recipe: GlyphRecipe) {
        self.glyphs.insert(code_point, recipe);
    }

    /// Add every recipe from an iterator, in order.
    pub fn add_recipes(&mut self, recipes: impl IntoIterator<Item = (u32, GlyphRecipe)>) {
        for (code_point, recipe) in recipes {
            self.add_glyph(code_point, recipe);
        }
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.glyphs.contains_key(&code_point)
    }

    /// Covered code points, in insertion order.
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.glyphs.keys().copied()
    }

    /// Number of recipes (excluding the implicit `.notdef`).
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub(crate) fn glyphs(&self) -> &IndexMap<u32, GlyphRecipe> {
        &self.glyphs
    }

    /// "Family Style", name ID 4.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.family, self.style)
    }

    /// "Family-Style" with spaces removed, name ID 6.
    pub fn postscript_name(&self) -> String {
        format!("{}-{}", self.family.replace(' ', ""), self.style.replace(' ', ""))
    }

    /// Name ID 3.
    pub fn unique_id(&self) -> String {
        format!("{};MITHILA;{}", self.version.tag, self.postscript_name().replace('-', ""))
    }

    /// Compile this descriptor to TTF bytes.
    pub fn compile(&self) -> Result<Vec<u8>> {
        compile::compile(self)
    }
}
