use kurbo::BezPath;

/// A glyph outline plus the horizontal space it occupies.
///
/// Outlines are authored in a 1000 units-per-em coordinate space with the
/// baseline at y=0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphRecipe {
    pub outline: BezPath,
    pub advance: u16,
}

impl GlyphRecipe {
    pub fn new(outline: BezPath, advance: u16) -> Self {
        Self { outline, advance }
    }

    /// A recipe with no outline, such as the space character.
    pub fn empty(advance: u16) -> Self {
        Self { outline: BezPath::new(), advance }
    }

    pub fn is_blank(&self) -> bool {
        self.outline.elements().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_recipe_is_blank() {
        let recipe = GlyphRecipe::empty(250);
        assert!(recipe.is_blank());
        assert_eq!(recipe.advance, 250);
    }

    #[test]
    fn drawn_recipe_is_not_blank() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.close_path();
        assert!(!GlyphRecipe::new(path, 100).is_blank());
    }
}
